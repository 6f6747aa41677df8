//! Backend del marketplace de transporte y publicidad.
//!
//! Servicio HTTP en Axum donde los operators manejan flotas, los
//! drivers registran trips, los advertisers contratan campañas y los
//! venues se registran como puntos de display de ads, todo moderado
//! por un admin. Los routers se mantienen delgados, los controllers
//! orquestan y los repositories son dueños de todo el SQL.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{middleware as axum_middleware, response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::auth::auth_middleware;
use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Crear el router completo de la aplicación.
///
/// Signup, login y el health check son públicos; todo lo demás queda
/// detrás del guard de sesión, y el árbol de admin además detrás del
/// check de solo-admin.
pub fn create_app(state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .nest("/api/auth", routes::auth_routes::create_auth_router());

    let protected = Router::new()
        .nest("/api/auth", routes::auth_routes::create_session_router())
        .nest("/api", routes::role_routes::create_role_router())
        .nest("/api/operator", routes::operator_routes::create_operator_router())
        .nest(
            "/api/advertiser",
            routes::advertiser_routes::create_advertiser_router(),
        )
        .nest("/api/venue", routes::venue_routes::create_venue_router())
        .nest("/api/driver", routes::driver_routes::create_driver_router())
        .nest(
            "/api/passenger",
            routes::passenger_routes::create_passenger_router(),
        )
        .nest("/api/admin", routes::admin_routes::create_admin_router())
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    public
        .merge(protected)
        .layer(cors_middleware())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Endpoint de health check
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "transit-marketplace",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
