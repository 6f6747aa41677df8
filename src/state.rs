//! Estado compartido de la aplicación
//!
//! Estado que se entrega al router de Axum y se clona en cada
//! handler. Contiene el pool de conexiones y la configuración del
//! entorno; no hay otro estado mutable a nivel de proceso.

use crate::config::environment::EnvironmentConfig;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }
}
