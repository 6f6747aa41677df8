//! Bootstrap de arranque
//!
//! Siembra la cuenta admin desde `ADMIN_EMAIL`/`ADMIN_PASSWORD`
//! cuando están configuradas. El signup nunca otorga el rol admin,
//! así que este es el único camino por el que aparece un admin.

use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;
use tracing::{info, warn};

use crate::config::environment::EnvironmentConfig;
use crate::models::profile::Role;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;

/// Crear la cuenta admin si está configurada y todavía no existe
pub async fn seed_admin_account(pool: &PgPool, config: &EnvironmentConfig) -> Result<(), AppError> {
    let (email, password) = match (&config.admin_email, &config.admin_password) {
        (Some(email), Some(password)) => (email, password),
        _ => {
            info!("Sin bootstrap de admin configurado, se omite");
            return Ok(());
        }
    };

    let repository = UserRepository::new(pool.clone());

    if repository.email_exists(email).await? {
        info!("La cuenta admin ya existe");
        return Ok(());
    }

    if password.len() < 8 {
        warn!("ADMIN_PASSWORD con menos de 8 caracteres, no se siembra la cuenta admin");
        return Ok(());
    }

    let password_hash = hash(password, DEFAULT_COST)
        .map_err(|e| AppError::Hash(format!("Error hashing admin password: {}", e)))?;

    repository
        .create_with_profile(email, &password_hash, Role::Admin.as_str())
        .await?;

    info!("👑 Cuenta admin sembrada para {}", email);
    Ok(())
}
