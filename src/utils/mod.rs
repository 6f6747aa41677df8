//! Utilidades compartidas
//!
//! Manejo de errores, helpers de validación y soporte JWT
//! usados en todo el servicio.

pub mod errors;
pub mod jwt;
pub mod validation;
