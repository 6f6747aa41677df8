//! Modelo de Operator
//!
//! Dueños de flota; mapea exactamente a la tabla operators. Un
//! operator por usuario dueño, garantizado por unique constraint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Mapea exactamente a la tabla operators
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Operator {
    pub id: Uuid,
    pub owner_user_id: Uuid,
    pub name: String,
    pub city: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
