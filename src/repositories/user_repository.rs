use chrono::Utc;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::profile::Profile;
use crate::models::user::User;
use crate::utils::errors::AppError;

/// Principal de identidad con el rol de su profile
#[derive(Debug, FromRow)]
pub struct Principal {
    pub id: Uuid,
    pub email: String,
    pub role: Option<String>,
}

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar el user y su fila 1:1 de profile en una transacción
    pub async fn create_with_profile(
        &self,
        email: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<User, AppError> {
        let mut tx = self.pool.begin().await?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO profiles (id, role, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(user.id)
        .bind(role)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Los profiles son 1:1 con users, así que viven en este repository
    pub async fn find_profile_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, AppError> {
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(profile)
    }

    /// Buscar un principal y su rol actual por email
    pub async fn find_principal_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Principal>, AppError> {
        let principal = sqlx::query_as::<_, Principal>(
            r#"
            SELECT u.id, u.email, p.role
            FROM users u
            LEFT JOIN profiles p ON p.id = u.id
            WHERE u.email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(principal)
    }
}
