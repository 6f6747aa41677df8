use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::status::TripStatus;
use crate::models::trip::Trip;
use crate::utils::errors::AppError;

pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Iniciar un trip; `started_at` se fija aquí y `route_id` queda sin asignar
    pub async fn create(
        &self,
        operator_id: Uuid,
        vehicle_id: Uuid,
        driver_user_id: Uuid,
    ) -> Result<Trip, AppError> {
        let now = Utc::now();
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips
                (id, operator_id, vehicle_id, route_id, driver_user_id, status, started_at, created_at)
            VALUES ($1, $2, $3, NULL, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(operator_id)
        .bind(vehicle_id)
        .bind(driver_user_id)
        .bind(TripStatus::Active.as_str())
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(trip)
    }

    pub async fn find_active_by_driver(
        &self,
        driver_user_id: Uuid,
    ) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            SELECT * FROM trips
            WHERE driver_user_id = $1 AND status = $2
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(driver_user_id)
        .bind(TripStatus::Active.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(trip)
    }

    /// Marcar un trip como completado con su timestamp de fin. Devuelve
    /// `None` si el trip ya estaba terminado cuando corrió el update.
    pub async fn complete(&self, id: Uuid) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET status = $2, ended_at = $3
            WHERE id = $1 AND status = $4
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(TripStatus::Completed.as_str())
        .bind(Utc::now())
        .bind(TripStatus::Active.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(trip)
    }
}
