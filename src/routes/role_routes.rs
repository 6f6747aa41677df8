use axum::{routing::get, Extension, Json, Router};

use crate::controllers::role_controller;
use crate::dto::role_dto::RouteMeResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;

pub fn create_role_router() -> Router<AppState> {
    Router::new().route("/route-me", get(route_me))
}

/// El role router: resuelve dónde vive el dashboard del caller
async fn route_me(Extension(user): Extension<AuthenticatedUser>) -> Json<RouteMeResponse> {
    Json(role_controller::resolve_destination(&user))
}
