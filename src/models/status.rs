//! Vocabularios de status
//!
//! Los status se guardan como texto plano y se parsean a estos enums
//! en el borde del dominio. `ApprovalStatus` es compartido por
//! operators, advertisers y venues; los trips tienen su propio ciclo.

use serde::{Deserialize, Serialize};

/// Ciclo de moderación de un profile del marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
    Suspended,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
            ApprovalStatus::Suspended => "suspended",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(ApprovalStatus::Pending),
            "approved" => Some(ApprovalStatus::Approved),
            "rejected" => Some(ApprovalStatus::Rejected),
            "suspended" => Some(ApprovalStatus::Suspended),
            _ => None,
        }
    }

    /// Targets que una transición de admin puede fijar. Pending es
    /// solo el estado de creación; ninguna acción vuelve a él.
    pub fn admin_transition_target(s: &str) -> Option<Self> {
        match Self::from_str(s) {
            Some(ApprovalStatus::Pending) | None => None,
            some => some,
        }
    }
}

/// Ciclo de vida del trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripStatus {
    Active,
    Completed,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Active => "active",
            TripStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(TripStatus::Active),
            "completed" => Some(TripStatus::Completed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approval_status_round_trips() {
        for status in [
            ApprovalStatus::Pending,
            ApprovalStatus::Approved,
            ApprovalStatus::Rejected,
            ApprovalStatus::Suspended,
        ] {
            assert_eq!(ApprovalStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(ApprovalStatus::from_str("deleted"), None);
    }

    #[test]
    fn admin_transitions_exclude_pending() {
        assert_eq!(
            ApprovalStatus::admin_transition_target("approved"),
            Some(ApprovalStatus::Approved)
        );
        assert_eq!(
            ApprovalStatus::admin_transition_target("rejected"),
            Some(ApprovalStatus::Rejected)
        );
        assert_eq!(
            ApprovalStatus::admin_transition_target("suspended"),
            Some(ApprovalStatus::Suspended)
        );
        assert_eq!(ApprovalStatus::admin_transition_target("pending"), None);
        assert_eq!(ApprovalStatus::admin_transition_target("nonsense"), None);
    }

    #[test]
    fn trip_status_round_trips() {
        assert_eq!(TripStatus::from_str("active"), Some(TripStatus::Active));
        assert_eq!(TripStatus::from_str("completed"), Some(TripStatus::Completed));
        assert_eq!(TripStatus::from_str("paused"), None);
    }
}
