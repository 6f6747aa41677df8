//! Modelos de datos
//!
//! Structs de fila que mapean exactamente al schema PostgreSQL, más
//! los vocabularios de rol y status parseados de sus columnas de
//! texto.

pub mod advertiser;
pub mod assignment;
pub mod campaign;
pub mod operator;
pub mod profile;
pub mod route;
pub mod status;
pub mod trip;
pub mod user;
pub mod vehicle;
pub mod venue;
