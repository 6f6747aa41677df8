use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::venue_controller::VenueController;
use crate::dto::venue_dto::{CreateVenueProfileRequest, VenueDashboardResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_venue_router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/profile", post(create_profile))
}

async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<VenueDashboardResponse>> {
    let controller = VenueController::new(state.pool.clone());
    let response = controller.dashboard(user.user_id).await?;
    Ok(Json(response))
}

async fn create_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateVenueProfileRequest>,
) -> AppResult<Json<VenueDashboardResponse>> {
    let controller = VenueController::new(state.pool.clone());
    let response = controller.create_profile(user.user_id, request).await?;
    Ok(Json(response))
}
