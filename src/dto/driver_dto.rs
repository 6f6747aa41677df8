use serde::Serialize;

use crate::models::{assignment::DriverAssignment, trip::Trip};

// Estado completo de la vista del driver: la assignment activa y el trip activo, si existen
#[derive(Debug, Serialize)]
pub struct DriverDashboardResponse {
    pub assignment: Option<DriverAssignment>,
    pub active_trip: Option<Trip>,
}
