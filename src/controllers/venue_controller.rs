use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::venue_dto::{CreateVenueProfileRequest, VenueDashboardResponse};
use crate::repositories::venue_repository::VenueRepository;
use crate::services::policy;
use crate::utils::errors::AppError;

pub struct VenueController {
    venues: VenueRepository,
}

impl VenueController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            venues: VenueRepository::new(pool),
        }
    }

    /// Los venues no tienen entidades hijas; la vista es el profile
    /// y su estado de lock.
    pub async fn dashboard(&self, user_id: Uuid) -> Result<VenueDashboardResponse, AppError> {
        let venue = self.venues.find_by_owner(user_id).await?;
        let locked = policy::lock_flag(venue.as_ref().map(|venue| venue.status.as_str()));

        Ok(VenueDashboardResponse { venue, locked })
    }

    pub async fn create_profile(
        &self,
        user_id: Uuid,
        request: CreateVenueProfileRequest,
    ) -> Result<VenueDashboardResponse, AppError> {
        request.validate()?;

        policy::require_first_profile(self.venues.exists_for_owner(user_id).await?, "Venue")?;

        let category = trimmed_optional(request.category.as_deref());
        let city = trimmed_optional(request.city.as_deref());
        let area = trimmed_optional(request.area.as_deref());

        self.venues
            .create(user_id, request.name.trim(), category, city, area)
            .await?;

        self.dashboard(user_id).await
    }
}

fn trimmed_optional(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_optional_fields_collapse_to_none() {
        assert_eq!(trimmed_optional(None), None);
        assert_eq!(trimmed_optional(Some("")), None);
        assert_eq!(trimmed_optional(Some("   ")), None);
        assert_eq!(trimmed_optional(Some(" Main Mall ")), Some("Main Mall"));
    }
}
