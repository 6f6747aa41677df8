use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::operator_dto::{
    CreateAssignmentRequest, CreateOperatorProfileRequest, CreateRouteRequest,
    CreateVehicleRequest, OperatorDashboardResponse,
};
use crate::models::profile::Role;
use crate::repositories::assignment_repository::AssignmentRepository;
use crate::repositories::operator_repository::OperatorRepository;
use crate::repositories::route_repository::RouteRepository;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::policy;
use crate::utils::errors::{conflict_error, AppError};
use crate::utils::validation::{
    validate_email, validate_not_empty, validate_plate_number, validate_range,
};

const DEFAULT_CITY: &str = "Gaborone";

pub struct OperatorController {
    operators: OperatorRepository,
    routes: RouteRepository,
    vehicles: VehicleRepository,
    assignments: AssignmentRepository,
    users: UserRepository,
}

impl OperatorController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            operators: OperatorRepository::new(pool.clone()),
            routes: RouteRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            assignments: AssignmentRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    /// Estado completo de la vista del operator. Las entidades hijas
    /// solo se listan una vez que el profile existe.
    pub async fn dashboard(&self, user_id: Uuid) -> Result<OperatorDashboardResponse, AppError> {
        let operator = self.operators.find_by_owner(user_id).await?;

        let (routes, vehicles, assignments) = match &operator {
            Some(op) => (
                self.routes.list_by_operator(op.id).await?,
                self.vehicles.list_by_operator(op.id).await?,
                self.assignments.list_by_operator(op.id).await?,
            ),
            None => (Vec::new(), Vec::new(), Vec::new()),
        };

        let locked = policy::lock_flag(operator.as_ref().map(|op| op.status.as_str()));

        Ok(OperatorDashboardResponse {
            operator,
            routes,
            vehicles,
            assignments,
            locked,
        })
    }

    pub async fn create_profile(
        &self,
        user_id: Uuid,
        request: CreateOperatorProfileRequest,
    ) -> Result<OperatorDashboardResponse, AppError> {
        request.validate()?;

        policy::require_first_profile(self.operators.exists_for_owner(user_id).await?, "Operator")?;

        let city = request
            .city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
            .unwrap_or(DEFAULT_CITY);

        self.operators
            .create(user_id, request.name.trim(), city)
            .await?;

        self.dashboard(user_id).await
    }

    pub async fn create_route(
        &self,
        user_id: Uuid,
        request: CreateRouteRequest,
    ) -> Result<OperatorDashboardResponse, AppError> {
        let operator = self.operators.find_by_owner(user_id).await?;
        let operator = policy::require_approved_operator(operator.as_ref())?;

        request.validate()?;
        validate_not_empty(&request.origin)
            .map_err(|_| AppError::BadRequest("Origin is required".to_string()))?;
        validate_not_empty(&request.destination)
            .map_err(|_| AppError::BadRequest("Destination is required".to_string()))?;

        self.routes
            .create(
                operator.id,
                request.name.trim(),
                request.origin.trim(),
                request.destination.trim(),
            )
            .await?;

        self.dashboard(user_id).await
    }

    pub async fn create_vehicle(
        &self,
        user_id: Uuid,
        request: CreateVehicleRequest,
    ) -> Result<OperatorDashboardResponse, AppError> {
        let operator = self.operators.find_by_owner(user_id).await?;
        let operator = policy::require_approved_operator(operator.as_ref())?;

        let plate_number = request.plate_number.trim();
        validate_plate_number(plate_number)
            .map_err(|_| AppError::BadRequest("Invalid plate number format".to_string()))?;
        validate_range(request.capacity, 1, 100)
            .map_err(|_| AppError::BadRequest("Capacity must be between 1 and 100".to_string()))?;

        if self.vehicles.plate_exists(operator.id, plate_number).await? {
            return Err(conflict_error("Vehicle", "plate number", plate_number));
        }

        // La route destino tiene que pertenecer a este operator.
        if let Some(route_id) = request.route_id {
            self.routes
                .find_owned(route_id, operator.id)
                .await?
                .ok_or_else(|| AppError::NotFound("Route not found".to_string()))?;
        }

        self.vehicles
            .create(operator.id, plate_number, request.capacity, request.route_id)
            .await?;

        self.dashboard(user_id).await
    }

    pub async fn create_assignment(
        &self,
        user_id: Uuid,
        request: CreateAssignmentRequest,
    ) -> Result<OperatorDashboardResponse, AppError> {
        let operator = self.operators.find_by_owner(user_id).await?;
        let operator = policy::require_approved_operator(operator.as_ref())?;

        let driver_email = request.driver_email.trim();
        validate_email(driver_email)
            .map_err(|_| AppError::BadRequest("Invalid driver email".to_string()))?;

        let driver = self
            .users
            .find_principal_by_email(driver_email)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        if driver.role.as_deref() != Some(Role::Driver.as_str()) {
            return Err(AppError::Unprocessable(
                "User is not registered as a driver".to_string(),
            ));
        }

        if let Some(vehicle_id) = request.vehicle_id {
            self.vehicles
                .find_owned(vehicle_id, operator.id)
                .await?
                .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;
        }

        // Una assignment activa por driver; el índice único parcial
        // respalda este check bajo races.
        if self.assignments.active_exists_for_driver(driver.id).await? {
            return Err(AppError::Conflict(
                "Driver already has an active assignment".to_string(),
            ));
        }

        self.assignments
            .create(operator.id, driver.id, request.vehicle_id)
            .await?;

        self.dashboard(user_id).await
    }
}
