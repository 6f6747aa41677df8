use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::route::Route;
use crate::utils::errors::AppError;

pub struct RouteRepository {
    pool: PgPool,
}

impl RouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        operator_id: Uuid,
        name: &str,
        origin: &str,
        destination: &str,
    ) -> Result<Route, AppError> {
        let route = sqlx::query_as::<_, Route>(
            r#"
            INSERT INTO routes (id, operator_id, name, origin, destination, active, created_at)
            VALUES ($1, $2, $3, $4, $5, TRUE, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(operator_id)
        .bind(name)
        .bind(origin)
        .bind(destination)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(route)
    }

    pub async fn list_by_operator(&self, operator_id: Uuid) -> Result<Vec<Route>, AppError> {
        let routes = sqlx::query_as::<_, Route>(
            "SELECT * FROM routes WHERE operator_id = $1 ORDER BY created_at DESC",
        )
        .bind(operator_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(routes)
    }

    /// Una route solo cuenta si pertenece al operator dado
    pub async fn find_owned(
        &self,
        id: Uuid,
        operator_id: Uuid,
    ) -> Result<Option<Route>, AppError> {
        let route = sqlx::query_as::<_, Route>(
            "SELECT * FROM routes WHERE id = $1 AND operator_id = $2",
        )
        .bind(id)
        .bind(operator_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(route)
    }
}
