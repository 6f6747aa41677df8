//! Modelo de Route
//!
//! Routes de transporte de un operator; mapea exactamente a la tabla routes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Mapea exactamente a la tabla routes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Route {
    pub id: Uuid,
    pub operator_id: Uuid,
    pub name: String,
    pub origin: String,
    pub destination: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
