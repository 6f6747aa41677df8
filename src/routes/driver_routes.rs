use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::driver_controller::DriverController;
use crate::dto::driver_dto::DriverDashboardResponse;
use crate::dto::response::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/trips/start", post(start_trip))
        .route("/trips/end", post(end_trip))
        .route("/ad-plays", post(log_ad_play))
}

async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<DriverDashboardResponse>> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.dashboard(user.user_id).await?;
    Ok(Json(response))
}

async fn start_trip(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<DriverDashboardResponse>> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.start_trip(user.user_id).await?;
    Ok(Json(response))
}

async fn end_trip(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<DriverDashboardResponse>> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.end_trip(user.user_id).await?;
    Ok(Json(response))
}

async fn log_ad_play(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<ApiResponse<()>>> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.log_ad_play(user.user_id).await?;
    Ok(Json(response))
}
