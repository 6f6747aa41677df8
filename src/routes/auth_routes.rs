use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, MeResponse, SignupRequest, UserSummary};
use crate::dto::response::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::jwt::JwtConfig;

/// Endpoints públicos: creación de cuentas e intercambio de credenciales
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

/// Endpoints de sesión que quedan detrás del guard de auth
pub fn create_session_router() -> Router<AppState> {
    Router::new()
        .route("/logout", post(logout))
        .route("/session", get(session))
        .route("/me", get(me))
}

fn controller(state: &AppState) -> AuthController {
    AuthController::new(state.pool.clone(), JwtConfig::from(&state.config))
}

async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> AppResult<Json<ApiResponse<UserSummary>>> {
    let response = controller(&state).signup(request).await?;
    Ok(Json(response))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let response = controller(&state).login(request).await?;
    Ok(Json(response))
}

async fn logout(State(state): State<AppState>) -> Json<ApiResponse<()>> {
    Json(controller(&state).logout())
}

async fn session(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Json<ApiResponse<UserSummary>> {
    Json(controller(&state).session(&user))
}

async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<ApiResponse<MeResponse>>> {
    let response = controller(&state).me(&user).await?;
    Ok(Json(response))
}
