//! Checks de capacidades
//!
//! Este módulo es la capa de policy explícita que reemplaza reglas
//! a nivel de fila: el gate de aprobación sobre los status de los
//! profiles, la capacidad de moderación del admin y los mensajes de
//! lock que muestran los dashboards.

use crate::middleware::auth::AuthenticatedUser;
use crate::models::advertiser::Advertiser;
use crate::models::operator::Operator;
use crate::models::status::ApprovalStatus;
use crate::utils::errors::AppError;

pub const OPERATOR_LOCK_MESSAGE: &str =
    "Your operator account is not approved yet. Admin must approve before you can add routes/vehicles.";
pub const ADVERTISER_LOCK_MESSAGE: &str =
    "Not approved yet. Admin must approve before campaigns can run.";

/// El gate de aprobación: función pura del status almacenado.
/// Todo lo que no sea exactamente "approved" queda bloqueado.
pub fn is_locked(status: &str) -> bool {
    ApprovalStatus::from_str(status) != Some(ApprovalStatus::Approved)
}

/// Flag de lock del dashboard. Una entidad que todavía no existe no
/// está bloqueada; el dashboard muestra el formulario de creación.
pub fn lock_flag(status: Option<&str>) -> bool {
    status.map(is_locked).unwrap_or(false)
}

/// Cada cuenta puede tener un solo profile de cada entidad
pub fn require_first_profile(exists: bool, entity: &str) -> Result<(), AppError> {
    if exists {
        return Err(AppError::Conflict(format!(
            "{} profile already exists for this account",
            entity
        )));
    }

    Ok(())
}

/// La gestión de routes y vehículos requiere un operator aprobado
pub fn require_approved_operator(operator: Option<&Operator>) -> Result<&Operator, AppError> {
    let operator = operator
        .ok_or_else(|| AppError::Forbidden("Create your operator profile first.".to_string()))?;

    if is_locked(&operator.status) {
        return Err(AppError::Forbidden(OPERATOR_LOCK_MESSAGE.to_string()));
    }

    Ok(operator)
}

/// La gestión de campañas requiere un advertiser aprobado
pub fn require_approved_advertiser(
    advertiser: Option<&Advertiser>,
) -> Result<&Advertiser, AppError> {
    let advertiser = advertiser
        .ok_or_else(|| AppError::Forbidden("Create your advertiser profile first.".to_string()))?;

    if is_locked(&advertiser.status) {
        return Err(AppError::Forbidden(ADVERTISER_LOCK_MESSAGE.to_string()));
    }

    Ok(advertiser)
}

/// Las acciones de moderación requieren el rol admin
pub fn require_admin(user: &AuthenticatedUser) -> Result<(), AppError> {
    if !user.is_admin() {
        return Err(AppError::Forbidden(
            "Administrator privileges required".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn operator_with_status(status: &str) -> Operator {
        Operator {
            id: Uuid::new_v4(),
            owner_user_id: Uuid::new_v4(),
            name: "Acme Transit".to_string(),
            city: "Gaborone".to_string(),
            status: status.to_string(),
            created_at: Utc::now(),
        }
    }

    fn advertiser_with_status(status: &str) -> Advertiser {
        Advertiser {
            id: Uuid::new_v4(),
            owner_user_id: Uuid::new_v4(),
            name: "Bright Ads".to_string(),
            status: status.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn only_approved_unlocks() {
        assert!(is_locked("pending"));
        assert!(is_locked("rejected"));
        assert!(is_locked("suspended"));
        assert!(is_locked("garbage"));
        assert!(!is_locked("approved"));
    }

    #[test]
    fn missing_entity_is_not_locked() {
        assert!(!lock_flag(None));
        assert!(lock_flag(Some("pending")));
        assert!(!lock_flag(Some("approved")));
    }

    #[test]
    fn second_profile_is_a_conflict() {
        assert!(require_first_profile(false, "Operator").is_ok());

        match require_first_profile(true, "Operator") {
            Err(AppError::Conflict(msg)) => {
                assert_eq!(msg, "Operator profile already exists for this account");
            }
            other => panic!("expected Conflict, got {:?}", other),
        }
    }

    #[test]
    fn operator_gate_blocks_every_unapproved_status() {
        for status in ["pending", "rejected", "suspended"] {
            let operator = operator_with_status(status);
            assert!(require_approved_operator(Some(&operator)).is_err());
        }

        let approved = operator_with_status("approved");
        assert!(require_approved_operator(Some(&approved)).is_ok());
        assert!(require_approved_operator(None).is_err());
    }

    #[test]
    fn advertiser_gate_blocks_every_unapproved_status() {
        for status in ["pending", "rejected", "suspended"] {
            let advertiser = advertiser_with_status(status);
            assert!(require_approved_advertiser(Some(&advertiser)).is_err());
        }

        let approved = advertiser_with_status("approved");
        assert!(require_approved_advertiser(Some(&approved)).is_ok());
    }

    #[test]
    fn admin_capability_requires_the_admin_role() {
        let admin = AuthenticatedUser {
            user_id: Uuid::new_v4(),
            email: "admin@fika.co.bw".to_string(),
            role: Some("admin".to_string()),
        };
        let operator = AuthenticatedUser {
            user_id: Uuid::new_v4(),
            email: "op@fika.co.bw".to_string(),
            role: Some("operator".to_string()),
        };

        assert!(require_admin(&admin).is_ok());
        assert!(require_admin(&operator).is_err());
    }
}
