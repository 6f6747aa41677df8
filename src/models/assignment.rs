//! Modelo de DriverAssignment
//!
//! Vincula un driver con un operator y opcionalmente un vehículo;
//! mapea exactamente a la tabla driver_assignments. Un índice único
//! parcial mantiene como máximo una assignment activa por driver.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Mapea exactamente a la tabla driver_assignments
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DriverAssignment {
    pub id: Uuid,
    pub operator_id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub driver_user_id: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
