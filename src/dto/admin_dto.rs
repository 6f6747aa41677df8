use serde::{Deserialize, Serialize};

use crate::models::{advertiser::Advertiser, operator::Operator, venue::Venue};

// Status destino de una acción de moderación
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

// Estado completo de la vista de moderación: todos los operators, advertisers y venues
#[derive(Debug, Serialize)]
pub struct AdminDashboardResponse {
    pub operators: Vec<Operator>,
    pub advertisers: Vec<Advertiser>,
    pub venues: Vec<Venue>,
}
