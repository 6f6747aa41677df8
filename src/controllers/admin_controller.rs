use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::admin_dto::{AdminDashboardResponse, UpdateStatusRequest};
use crate::models::status::ApprovalStatus;
use crate::repositories::advertiser_repository::AdvertiserRepository;
use crate::repositories::operator_repository::OperatorRepository;
use crate::repositories::venue_repository::VenueRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct AdminController {
    operators: OperatorRepository,
    advertisers: AdvertiserRepository,
    venues: VenueRepository,
}

impl AdminController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            operators: OperatorRepository::new(pool.clone()),
            advertisers: AdvertiserRepository::new(pool.clone()),
            venues: VenueRepository::new(pool),
        }
    }

    /// Todos los profiles moderables, el más nuevo primero, sin paginación
    pub async fn dashboard(&self) -> Result<AdminDashboardResponse, AppError> {
        Ok(AdminDashboardResponse {
            operators: self.operators.list_all().await?,
            advertisers: self.advertisers.list_all().await?,
            venues: self.venues.list_all().await?,
        })
    }

    pub async fn update_operator_status(
        &self,
        id: Uuid,
        request: UpdateStatusRequest,
    ) -> Result<AdminDashboardResponse, AppError> {
        let target = Self::transition_target(&request.status)?;

        self.operators
            .update_status(id, target.as_str())
            .await?
            .ok_or_else(|| not_found_error("Operator", &id.to_string()))?;

        self.dashboard().await
    }

    pub async fn update_advertiser_status(
        &self,
        id: Uuid,
        request: UpdateStatusRequest,
    ) -> Result<AdminDashboardResponse, AppError> {
        let target = Self::transition_target(&request.status)?;

        self.advertisers
            .update_status(id, target.as_str())
            .await?
            .ok_or_else(|| not_found_error("Advertiser", &id.to_string()))?;

        self.dashboard().await
    }

    pub async fn update_venue_status(
        &self,
        id: Uuid,
        request: UpdateStatusRequest,
    ) -> Result<AdminDashboardResponse, AppError> {
        let target = Self::transition_target(&request.status)?;

        self.venues
            .update_status(id, target.as_str())
            .await?
            .ok_or_else(|| not_found_error("Venue", &id.to_string()))?;

        self.dashboard().await
    }

    /// El update en sí es incondicional sobre el status actual; solo
    /// el set de targets está restringido.
    fn transition_target(status: &str) -> Result<ApprovalStatus, AppError> {
        ApprovalStatus::admin_transition_target(status).ok_or_else(|| {
            AppError::Unprocessable(
                "Status must be one of approved, rejected or suspended".to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moderation_accepts_only_decided_targets() {
        assert!(AdminController::transition_target("approved").is_ok());
        assert!(AdminController::transition_target("rejected").is_ok());
        assert!(AdminController::transition_target("suspended").is_ok());
        assert!(AdminController::transition_target("pending").is_err());
        assert!(AdminController::transition_target("deleted").is_err());
    }
}
