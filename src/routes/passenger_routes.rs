use axum::{routing::get, Json, Router};

use crate::dto::response::ApiResponse;
use crate::state::AppState;

pub fn create_passenger_router() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard))
}

/// Vista placeholder hasta que lleguen las features de passenger
async fn dashboard() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message_only(
        "Next: route discovery + join trip + loyalty points.".to_string(),
    ))
}
