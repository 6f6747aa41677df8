//! Configuración del servicio
//!
//! Variables de entorno y settings de base de datos.

pub mod database;
pub mod environment;

pub use environment::*;
