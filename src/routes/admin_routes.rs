use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::admin_controller::AdminController;
use crate::dto::admin_dto::{AdminDashboardResponse, UpdateStatusRequest};
use crate::middleware::auth::admin_only_middleware;
use crate::state::AppState;
use crate::utils::errors::AppResult;

/// Endpoints de moderación; todo el árbol requiere el rol admin
pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/operators/:id/status", put(update_operator_status))
        .route("/advertisers/:id/status", put(update_advertiser_status))
        .route("/venues/:id/status", put(update_venue_status))
        .layer(middleware::from_fn(admin_only_middleware))
}

async fn dashboard(
    State(state): State<AppState>,
) -> AppResult<Json<AdminDashboardResponse>> {
    let controller = AdminController::new(state.pool.clone());
    let response = controller.dashboard().await?;
    Ok(Json(response))
}

async fn update_operator_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> AppResult<Json<AdminDashboardResponse>> {
    let controller = AdminController::new(state.pool.clone());
    let response = controller.update_operator_status(id, request).await?;
    Ok(Json(response))
}

async fn update_advertiser_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> AppResult<Json<AdminDashboardResponse>> {
    let controller = AdminController::new(state.pool.clone());
    let response = controller.update_advertiser_status(id, request).await?;
    Ok(Json(response))
}

async fn update_venue_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> AppResult<Json<AdminDashboardResponse>> {
    let controller = AdminController::new(state.pool.clone());
    let response = controller.update_venue_status(id, request).await?;
    Ok(Json(response))
}
