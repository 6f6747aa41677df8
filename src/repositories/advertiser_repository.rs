use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::advertiser::Advertiser;
use crate::utils::errors::AppError;

pub struct AdvertiserRepository {
    pool: PgPool,
}

impl AdvertiserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, owner_user_id: Uuid, name: &str) -> Result<Advertiser, AppError> {
        let advertiser = sqlx::query_as::<_, Advertiser>(
            r#"
            INSERT INTO advertisers (id, owner_user_id, name, status, created_at)
            VALUES ($1, $2, $3, 'pending', $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(owner_user_id)
        .bind(name)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(advertiser)
    }

    /// El advertiser del dueño; la unique constraint deja esto en
    /// una sola fila.
    pub async fn find_by_owner(
        &self,
        owner_user_id: Uuid,
    ) -> Result<Option<Advertiser>, AppError> {
        let advertiser = sqlx::query_as::<_, Advertiser>(
            "SELECT * FROM advertisers WHERE owner_user_id = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(owner_user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(advertiser)
    }

    pub async fn exists_for_owner(&self, owner_user_id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM advertisers WHERE owner_user_id = $1)")
                .bind(owner_user_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn list_all(&self) -> Result<Vec<Advertiser>, AppError> {
        let advertisers =
            sqlx::query_as::<_, Advertiser>("SELECT * FROM advertisers ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(advertisers)
    }

    /// Update de status incondicional; devuelve None cuando el id es desconocido
    pub async fn update_status(
        &self,
        id: Uuid,
        status: &str,
    ) -> Result<Option<Advertiser>, AppError> {
        let advertiser = sqlx::query_as::<_, Advertiser>(
            "UPDATE advertisers SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(advertiser)
    }
}
