use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::advertiser_controller::AdvertiserController;
use crate::dto::advertiser_dto::{
    AdvertiserDashboardResponse, CreateAdvertiserProfileRequest, CreateCampaignRequest,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_advertiser_router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/profile", post(create_profile))
        .route("/campaigns", post(create_campaign))
}

async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<AdvertiserDashboardResponse>> {
    let controller = AdvertiserController::new(state.pool.clone());
    let response = controller.dashboard(user.user_id).await?;
    Ok(Json(response))
}

async fn create_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateAdvertiserProfileRequest>,
) -> AppResult<Json<AdvertiserDashboardResponse>> {
    let controller = AdvertiserController::new(state.pool.clone());
    let response = controller.create_profile(user.user_id, request).await?;
    Ok(Json(response))
}

async fn create_campaign(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateCampaignRequest>,
) -> AppResult<Json<AdvertiserDashboardResponse>> {
    let controller = AdvertiserController::new(state.pool.clone());
    let response = controller.create_campaign(user.user_id, request).await?;
    Ok(Json(response))
}
