//! Modelo de Profile
//!
//! Un profile por principal de identidad con el string del rol, más
//! el vocabulario `Role` y sus destinos de dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Mapea exactamente a la tabla profiles; `id` es el id del user dueño
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Roles del sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Operator,
    Driver,
    Advertiser,
    Venue,
    Passenger,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Operator => "operator",
            Role::Driver => "driver",
            Role::Advertiser => "advertiser",
            Role::Venue => "venue",
            Role::Passenger => "passenger",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "operator" => Some(Role::Operator),
            "driver" => Some(Role::Driver),
            "advertiser" => Some(Role::Advertiser),
            "venue" => Some(Role::Venue),
            "passenger" => Some(Role::Passenger),
            _ => None,
        }
    }

    /// Destino del dashboard después del login.
    ///
    /// Mapeo fijo con default de passenger; los dueños de venue
    /// navegan directo a su dashboard, así que el rol venue también
    /// cae en la vista de passenger.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Operator => "/operator",
            Role::Driver => "/driver",
            Role::Advertiser => "/advertiser",
            Role::Venue | Role::Passenger => "/passenger",
        }
    }

    /// Roles que un signup puede pedir; admin nunca se otorga aquí
    pub fn assignable_from_signup(s: &str) -> Option<Self> {
        match Role::from_str(s) {
            Some(Role::Admin) | None => None,
            some => some,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_strings() {
        for role in [
            Role::Admin,
            Role::Operator,
            Role::Driver,
            Role::Advertiser,
            Role::Venue,
            Role::Passenger,
        ] {
            assert_eq!(Role::from_str(role.as_str()), Some(role));
        }
        assert_eq!(Role::from_str("superuser"), None);
    }

    #[test]
    fn dashboard_paths_follow_the_fixed_mapping() {
        assert_eq!(Role::Admin.dashboard_path(), "/admin");
        assert_eq!(Role::Operator.dashboard_path(), "/operator");
        assert_eq!(Role::Driver.dashboard_path(), "/driver");
        assert_eq!(Role::Advertiser.dashboard_path(), "/advertiser");
        assert_eq!(Role::Venue.dashboard_path(), "/passenger");
        assert_eq!(Role::Passenger.dashboard_path(), "/passenger");
    }

    #[test]
    fn signup_can_never_request_admin() {
        assert_eq!(Role::assignable_from_signup("admin"), None);
        assert_eq!(Role::assignable_from_signup("nonsense"), None);
        assert_eq!(Role::assignable_from_signup("driver"), Some(Role::Driver));
        assert_eq!(Role::assignable_from_signup("venue"), Some(Role::Venue));
    }
}
