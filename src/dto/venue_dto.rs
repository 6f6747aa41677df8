use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::venue::Venue;

// Request para registrar un venue como punto de display de ads
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVenueProfileRequest {
    #[validate(length(min = 2, max = 120))]
    pub name: String,
    pub category: Option<String>,
    pub city: Option<String>,
    pub area: Option<String>,
}

// Estado completo de la vista del venue
#[derive(Debug, Serialize)]
pub struct VenueDashboardResponse {
    pub venue: Option<Venue>,
    pub locked: bool,
}
