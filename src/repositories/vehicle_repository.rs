use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        operator_id: Uuid,
        plate_number: &str,
        capacity: i32,
        route_id: Option<Uuid>,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, operator_id, route_id, plate_number, capacity, status, created_at)
            VALUES ($1, $2, $3, $4, $5, 'active', $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(operator_id)
        .bind(route_id)
        .bind(plate_number)
        .bind(capacity)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn list_by_operator(&self, operator_id: Uuid) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE operator_id = $1 ORDER BY created_at DESC",
        )
        .bind(operator_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn plate_exists(
        &self,
        operator_id: Uuid,
        plate_number: &str,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE operator_id = $1 AND plate_number = $2)",
        )
        .bind(operator_id)
        .bind(plate_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Un vehículo solo cuenta si pertenece al operator dado
    pub async fn find_owned(
        &self,
        id: Uuid,
        operator_id: Uuid,
    ) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE id = $1 AND operator_id = $2",
        )
        .bind(id)
        .bind(operator_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }
}
