use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::assignment::DriverAssignment;
use crate::utils::errors::AppError;

pub struct AssignmentRepository {
    pool: PgPool,
}

impl AssignmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        operator_id: Uuid,
        driver_user_id: Uuid,
        vehicle_id: Option<Uuid>,
    ) -> Result<DriverAssignment, AppError> {
        let assignment = sqlx::query_as::<_, DriverAssignment>(
            r#"
            INSERT INTO driver_assignments (id, operator_id, vehicle_id, driver_user_id, status, created_at)
            VALUES ($1, $2, $3, $4, 'active', $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(operator_id)
        .bind(vehicle_id)
        .bind(driver_user_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(assignment)
    }

    pub async fn find_active_by_driver(
        &self,
        driver_user_id: Uuid,
    ) -> Result<Option<DriverAssignment>, AppError> {
        let assignment = sqlx::query_as::<_, DriverAssignment>(
            r#"
            SELECT * FROM driver_assignments
            WHERE driver_user_id = $1 AND status = 'active'
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(driver_user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(assignment)
    }

    pub async fn active_exists_for_driver(&self, driver_user_id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM driver_assignments WHERE driver_user_id = $1 AND status = 'active')",
        )
        .bind(driver_user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn list_by_operator(
        &self,
        operator_id: Uuid,
    ) -> Result<Vec<DriverAssignment>, AppError> {
        let assignments = sqlx::query_as::<_, DriverAssignment>(
            "SELECT * FROM driver_assignments WHERE operator_id = $1 ORDER BY created_at DESC",
        )
        .bind(operator_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(assignments)
    }
}
