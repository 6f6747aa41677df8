//! Routing por rol
//!
//! Convierte el rol actual del caller en un destino de dashboard.
//! El mapeo es total: un principal sin profile cae en la ruta de
//! entrada, un string de rol desconocido en la vista de passenger.

use crate::dto::role_dto::RouteMeResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::profile::Role;

pub fn resolve_destination(user: &AuthenticatedUser) -> RouteMeResponse {
    let destination = match user.role.as_deref() {
        // Sin fila de profile: fallar cerrado y mandar al caller de vuelta a la entrada.
        None => "/".to_string(),
        Some(role) => Role::from_str(role)
            .map(|role| role.dashboard_path())
            .unwrap_or("/passenger")
            .to_string(),
    };

    RouteMeResponse {
        destination,
        role: user.role.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user_with_role(role: Option<&str>) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: Uuid::new_v4(),
            email: "who@fika.co.bw".to_string(),
            role: role.map(|r| r.to_string()),
        }
    }

    #[test]
    fn every_known_role_maps_to_its_dashboard() {
        assert_eq!(user_destination(Some("admin")), "/admin");
        assert_eq!(user_destination(Some("operator")), "/operator");
        assert_eq!(user_destination(Some("driver")), "/driver");
        assert_eq!(user_destination(Some("advertiser")), "/advertiser");
        assert_eq!(user_destination(Some("venue")), "/passenger");
        assert_eq!(user_destination(Some("passenger")), "/passenger");
    }

    #[test]
    fn unknown_role_defaults_to_passenger() {
        assert_eq!(user_destination(Some("superuser")), "/passenger");
        assert_eq!(user_destination(Some("")), "/passenger");
    }

    #[test]
    fn missing_profile_returns_to_entry() {
        assert_eq!(user_destination(None), "/");
    }

    fn user_destination(role: Option<&str>) -> String {
        resolve_destination(&user_with_role(role)).destination
    }
}
