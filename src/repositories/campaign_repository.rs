use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::campaign::Campaign;
use crate::utils::errors::AppError;

pub struct CampaignRepository {
    pool: PgPool,
}

impl CampaignRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        advertiser_id: Uuid,
        title: &str,
        audio_url: Option<&str>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        budget_pula: Decimal,
    ) -> Result<Campaign, AppError> {
        let campaign = sqlx::query_as::<_, Campaign>(
            r#"
            INSERT INTO campaigns
                (id, advertiser_id, title, audio_url, start_date, end_date, budget_pula, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'pending', $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(advertiser_id)
        .bind(title)
        .bind(audio_url)
        .bind(start_date)
        .bind(end_date)
        .bind(budget_pula)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(campaign)
    }

    pub async fn list_by_advertiser(&self, advertiser_id: Uuid) -> Result<Vec<Campaign>, AppError> {
        let campaigns = sqlx::query_as::<_, Campaign>(
            "SELECT * FROM campaigns WHERE advertiser_id = $1 ORDER BY created_at DESC",
        )
        .bind(advertiser_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(campaigns)
    }
}
