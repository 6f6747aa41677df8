//! Helpers de validación
//!
//! Checks a nivel de campo compartidos por los controllers. Cada
//! helper devuelve un `ValidationError` que el caller mapea a un
//! error HTTP.

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use validator::ValidationError;

static PLATE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Validar y convertir un string `YYYY-MM-DD` en fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar que un string no esté en blanco
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor caiga dentro de un rango inclusivo
pub fn validate_range<T: PartialOrd + std::fmt::Display + Serialize>(
    value: T,
    min: T,
    max: T,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        let mut error = ValidationError::new("range");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de email (check básico de forma)
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !value.contains('@') || !value.contains('.') {
        let mut error = ValidationError::new("email");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor no sea negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar una matrícula de vehículo
///
/// Acepta grupos alfanuméricos separados por espacios simples o
/// guiones, de 5 a 10 caracteres significativos (ej. "B 123 ABC").
pub fn validate_plate_number(value: &str) -> Result<(), ValidationError> {
    let re = PLATE_REGEX
        .get_or_init(|| Regex::new(r"^[A-Za-z0-9]+([ -][A-Za-z0-9]+)*$").unwrap());

    let compact: String = value.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    if compact.len() < 5 || compact.len() > 10 || !re.is_match(value.trim()) {
        let mut error = ValidationError::new("plate_number");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2024-01-15").is_ok());
        assert!(validate_date("2024/01/15").is_err());
        assert!(validate_date("15-01-2024").is_err());
        assert!(validate_date("").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("Acme Transit").is_ok());
        assert!(validate_not_empty("").is_err());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range(14, 1, 100).is_ok());
        assert!(validate_range(0, 1, 100).is_err());
        assert!(validate_range(101, 1, 100).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("invalid-email").is_err());
        assert!(validate_email("test@").is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative(Decimal::new(5000, 2)).is_ok());
        assert!(validate_non_negative(Decimal::ZERO).is_ok());
        assert!(validate_non_negative(Decimal::new(-1, 0)).is_err());
    }

    #[test]
    fn test_validate_plate_number() {
        assert!(validate_plate_number("B 123 ABC").is_ok());
        assert!(validate_plate_number("AB-123-CD").is_ok());
        assert!(validate_plate_number("B123").is_err());
        assert!(validate_plate_number("ABCDEFGHIJK").is_err());
        assert!(validate_plate_number("B !23 ABC").is_err());
    }
}
