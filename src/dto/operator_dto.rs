use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{
    assignment::DriverAssignment, operator::Operator, route::Route, vehicle::Vehicle,
};

// Request para crear el profile de operator; la city por defecto es Gaborone
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOperatorProfileRequest {
    #[validate(length(min = 2, max = 120))]
    pub name: String,
    pub city: Option<String>,
}

// Request para crear una route de transporte
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRouteRequest {
    #[validate(length(min = 2, max = 120))]
    pub name: String,
    pub origin: String,
    pub destination: String,
}

// Request para agregar un vehículo a la flota
#[derive(Debug, Deserialize)]
pub struct CreateVehicleRequest {
    pub plate_number: String,
    pub capacity: i32,
    pub route_id: Option<Uuid>,
}

// Request para asignar un driver, opcionalmente con vehículo
#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    pub driver_email: String,
    pub vehicle_id: Option<Uuid>,
}

// Estado completo de la vista del operator; lo devuelven el dashboard y cada mutación
#[derive(Debug, Serialize)]
pub struct OperatorDashboardResponse {
    pub operator: Option<Operator>,
    pub routes: Vec<Route>,
    pub vehicles: Vec<Vehicle>,
    pub assignments: Vec<DriverAssignment>,
    pub locked: bool,
}
