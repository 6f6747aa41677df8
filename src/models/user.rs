//! Modelo de User
//!
//! Filas de principals de identidad; mapea exactamente a la tabla
//! users. El password hash nunca se serializa hacia afuera.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Mapea exactamente a la tabla users
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
