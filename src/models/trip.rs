//! Modelo de Trip
//!
//! El turno de servicio de un driver, activo hasta que termina;
//! mapea exactamente a la tabla trips. Un índice único parcial
//! mantiene como máximo un trip activo por driver.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Mapea exactamente a la tabla trips
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trip {
    pub id: Uuid,
    pub operator_id: Uuid,
    pub vehicle_id: Uuid,
    pub route_id: Option<Uuid>,
    pub driver_user_id: Uuid,
    pub status: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
