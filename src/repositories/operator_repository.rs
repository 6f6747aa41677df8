use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::operator::Operator;
use crate::utils::errors::AppError;

pub struct OperatorRepository {
    pool: PgPool,
}

impl OperatorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        owner_user_id: Uuid,
        name: &str,
        city: &str,
    ) -> Result<Operator, AppError> {
        let operator = sqlx::query_as::<_, Operator>(
            r#"
            INSERT INTO operators (id, owner_user_id, name, city, status, created_at)
            VALUES ($1, $2, $3, $4, 'pending', $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(owner_user_id)
        .bind(name)
        .bind(city)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(operator)
    }

    /// El operator del dueño; la unique constraint deja esto en
    /// una sola fila.
    pub async fn find_by_owner(&self, owner_user_id: Uuid) -> Result<Option<Operator>, AppError> {
        let operator = sqlx::query_as::<_, Operator>(
            "SELECT * FROM operators WHERE owner_user_id = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(owner_user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(operator)
    }

    pub async fn exists_for_owner(&self, owner_user_id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM operators WHERE owner_user_id = $1)")
                .bind(owner_user_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn list_all(&self) -> Result<Vec<Operator>, AppError> {
        let operators =
            sqlx::query_as::<_, Operator>("SELECT * FROM operators ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(operators)
    }

    /// Update de status incondicional; devuelve None cuando el id es desconocido
    pub async fn update_status(
        &self,
        id: Uuid,
        status: &str,
    ) -> Result<Option<Operator>, AppError> {
        let operator = sqlx::query_as::<_, Operator>(
            "UPDATE operators SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(operator)
    }
}
