use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::operator_controller::OperatorController;
use crate::dto::operator_dto::{
    CreateAssignmentRequest, CreateOperatorProfileRequest, CreateRouteRequest,
    CreateVehicleRequest, OperatorDashboardResponse,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_operator_router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/profile", post(create_profile))
        .route("/routes", post(create_route))
        .route("/vehicles", post(create_vehicle))
        .route("/assignments", post(create_assignment))
}

async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<OperatorDashboardResponse>> {
    let controller = OperatorController::new(state.pool.clone());
    let response = controller.dashboard(user.user_id).await?;
    Ok(Json(response))
}

async fn create_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateOperatorProfileRequest>,
) -> AppResult<Json<OperatorDashboardResponse>> {
    let controller = OperatorController::new(state.pool.clone());
    let response = controller.create_profile(user.user_id, request).await?;
    Ok(Json(response))
}

async fn create_route(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateRouteRequest>,
) -> AppResult<Json<OperatorDashboardResponse>> {
    let controller = OperatorController::new(state.pool.clone());
    let response = controller.create_route(user.user_id, request).await?;
    Ok(Json(response))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateVehicleRequest>,
) -> AppResult<Json<OperatorDashboardResponse>> {
    let controller = OperatorController::new(state.pool.clone());
    let response = controller.create_vehicle(user.user_id, request).await?;
    Ok(Json(response))
}

async fn create_assignment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateAssignmentRequest>,
) -> AppResult<Json<OperatorDashboardResponse>> {
    let controller = OperatorController::new(state.pool.clone());
    let response = controller.create_assignment(user.user_id, request).await?;
    Ok(Json(response))
}
