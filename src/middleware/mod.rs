//! Middleware
//!
//! Capas de autenticación y CORS aplicadas al router.

pub mod auth;
pub mod cors;

pub use auth::*;
pub use cors::*;
