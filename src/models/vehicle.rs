//! Modelo de Vehicle
//!
//! Vehículos de la flota del operator; mapea exactamente a la tabla
//! vehicles. La matrícula es única dentro de la flota del operator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub operator_id: Uuid,
    pub route_id: Option<Uuid>,
    pub plate_number: String,
    pub capacity: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
