//! Modelo de Advertiser
//!
//! Negocios que corren campañas; mapea exactamente a la tabla
//! advertisers. Un advertiser por usuario dueño, garantizado por
//! unique constraint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Mapea exactamente a la tabla advertisers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Advertiser {
    pub id: Uuid,
    pub owner_user_id: Uuid,
    pub name: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
