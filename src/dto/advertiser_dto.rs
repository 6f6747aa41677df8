use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{advertiser::Advertiser, campaign::Campaign};

// Request para crear el profile de advertiser
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAdvertiserProfileRequest {
    #[validate(length(min = 2, max = 120))]
    pub name: String,
}

// Request para crear una campaña; las fechas son strings YYYY-MM-DD
#[derive(Debug, Deserialize)]
pub struct CreateCampaignRequest {
    pub title: String,
    pub audio_url: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub budget_pula: f64,
}

// Estado completo de la vista del advertiser
#[derive(Debug, Serialize)]
pub struct AdvertiserDashboardResponse {
    pub advertiser: Option<Advertiser>,
    pub campaigns: Vec<Campaign>,
    pub locked: bool,
}
