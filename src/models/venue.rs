//! Modelo de Venue
//!
//! Puntos físicos de display de ads (salones, lounges, tiendas);
//! mapea exactamente a la tabla venues. Un venue por usuario dueño.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Mapea exactamente a la tabla venues
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Venue {
    pub id: Uuid,
    pub owner_user_id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub city: Option<String>,
    pub area: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
