//! Modelo de Campaign
//!
//! Campañas de ads de un advertiser; mapea exactamente a la tabla
//! campaigns. Los presupuestos son montos en Pula guardados como
//! NUMERIC.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Mapea exactamente a la tabla campaigns
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Campaign {
    pub id: Uuid,
    pub advertiser_id: Uuid,
    pub title: String,
    pub audio_url: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget_pula: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
