use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::advertiser_dto::{
    AdvertiserDashboardResponse, CreateAdvertiserProfileRequest, CreateCampaignRequest,
};
use crate::repositories::advertiser_repository::AdvertiserRepository;
use crate::repositories::campaign_repository::CampaignRepository;
use crate::services::policy;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_date, validate_non_negative, validate_not_empty};

pub struct AdvertiserController {
    advertisers: AdvertiserRepository,
    campaigns: CampaignRepository,
}

impl AdvertiserController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            advertisers: AdvertiserRepository::new(pool.clone()),
            campaigns: CampaignRepository::new(pool),
        }
    }

    pub async fn dashboard(&self, user_id: Uuid) -> Result<AdvertiserDashboardResponse, AppError> {
        let advertiser = self.advertisers.find_by_owner(user_id).await?;

        let campaigns = match &advertiser {
            Some(adv) => self.campaigns.list_by_advertiser(adv.id).await?,
            None => Vec::new(),
        };

        let locked = policy::lock_flag(advertiser.as_ref().map(|adv| adv.status.as_str()));

        Ok(AdvertiserDashboardResponse {
            advertiser,
            campaigns,
            locked,
        })
    }

    pub async fn create_profile(
        &self,
        user_id: Uuid,
        request: CreateAdvertiserProfileRequest,
    ) -> Result<AdvertiserDashboardResponse, AppError> {
        request.validate()?;

        policy::require_first_profile(
            self.advertisers.exists_for_owner(user_id).await?,
            "Advertiser",
        )?;

        self.advertisers.create(user_id, request.name.trim()).await?;

        self.dashboard(user_id).await
    }

    pub async fn create_campaign(
        &self,
        user_id: Uuid,
        request: CreateCampaignRequest,
    ) -> Result<AdvertiserDashboardResponse, AppError> {
        let advertiser = self.advertisers.find_by_owner(user_id).await?;
        let advertiser = policy::require_approved_advertiser(advertiser.as_ref())?;

        validate_not_empty(&request.title)
            .map_err(|_| AppError::BadRequest("Title is required".to_string()))?;

        let start_date = validate_date(&request.start_date)
            .map_err(|_| AppError::BadRequest("start_date must be YYYY-MM-DD".to_string()))?;
        let end_date = validate_date(&request.end_date)
            .map_err(|_| AppError::BadRequest("end_date must be YYYY-MM-DD".to_string()))?;

        let budget_pula = Decimal::from_f64_retain(request.budget_pula)
            .ok_or_else(|| AppError::BadRequest("Invalid budget amount".to_string()))?;
        validate_non_negative(budget_pula)
            .map_err(|_| AppError::BadRequest("Budget cannot be negative".to_string()))?;

        let audio_url = request
            .audio_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty());

        self.campaigns
            .create(
                advertiser.id,
                request.title.trim(),
                audio_url,
                start_date,
                end_date,
                budget_pula,
            )
            .await?;

        self.dashboard(user_id).await
    }
}
