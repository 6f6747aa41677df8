use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::venue::Venue;
use crate::utils::errors::AppError;

pub struct VenueRepository {
    pool: PgPool,
}

impl VenueRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        owner_user_id: Uuid,
        name: &str,
        category: Option<&str>,
        city: Option<&str>,
        area: Option<&str>,
    ) -> Result<Venue, AppError> {
        let venue = sqlx::query_as::<_, Venue>(
            r#"
            INSERT INTO venues (id, owner_user_id, name, category, city, area, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, 'pending', $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(owner_user_id)
        .bind(name)
        .bind(category)
        .bind(city)
        .bind(area)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(venue)
    }

    /// El venue del dueño; la unique constraint deja esto en
    /// una sola fila.
    pub async fn find_by_owner(&self, owner_user_id: Uuid) -> Result<Option<Venue>, AppError> {
        let venue = sqlx::query_as::<_, Venue>(
            "SELECT * FROM venues WHERE owner_user_id = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(owner_user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(venue)
    }

    pub async fn exists_for_owner(&self, owner_user_id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM venues WHERE owner_user_id = $1)")
                .bind(owner_user_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn list_all(&self) -> Result<Vec<Venue>, AppError> {
        let venues = sqlx::query_as::<_, Venue>("SELECT * FROM venues ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(venues)
    }

    /// Update de status incondicional; devuelve None cuando el id es desconocido
    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<Option<Venue>, AppError> {
        let venue =
            sqlx::query_as::<_, Venue>("UPDATE venues SET status = $2 WHERE id = $1 RETURNING *")
                .bind(id)
                .bind(status)
                .fetch_optional(&self.pool)
                .await?;

        Ok(venue)
    }
}
