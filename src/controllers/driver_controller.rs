use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::driver_dto::DriverDashboardResponse;
use crate::dto::response::ApiResponse;
use crate::models::assignment::DriverAssignment;
use crate::models::trip::Trip;
use crate::repositories::assignment_repository::AssignmentRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::utils::errors::AppError;

const NO_ASSIGNMENT_MESSAGE: &str =
    "No active assignment with a vehicle. Operator must assign you.";
const NO_ACTIVE_TRIP_MESSAGE: &str = "No active trip to end.";

pub struct DriverController {
    assignments: AssignmentRepository,
    trips: TripRepository,
}

impl DriverController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            assignments: AssignmentRepository::new(pool.clone()),
            trips: TripRepository::new(pool),
        }
    }

    pub async fn dashboard(&self, user_id: Uuid) -> Result<DriverDashboardResponse, AppError> {
        let assignment = self.assignments.find_active_by_driver(user_id).await?;
        let active_trip = self.trips.find_active_by_driver(user_id).await?;

        Ok(DriverDashboardResponse {
            assignment,
            active_trip,
        })
    }

    /// Decisión pura de inicio: un trip necesita una assignment activa
    /// que nombre un vehículo, y un driver solo puede correr un trip a
    /// la vez. Devuelve el operator y el vehículo del trip nuevo.
    fn start_decision(
        assignment: Option<&DriverAssignment>,
        active_trip: Option<&Trip>,
    ) -> Result<(Uuid, Uuid), AppError> {
        let assignment = assignment
            .ok_or_else(|| AppError::Unprocessable(NO_ASSIGNMENT_MESSAGE.to_string()))?;

        let vehicle_id = assignment
            .vehicle_id
            .ok_or_else(|| AppError::Unprocessable(NO_ASSIGNMENT_MESSAGE.to_string()))?;

        if active_trip.is_some() {
            return Err(AppError::Conflict(
                "A trip is already active. End it before starting another.".to_string(),
            ));
        }

        Ok((assignment.operator_id, vehicle_id))
    }

    /// Decisión pura de fin: el trip activo es obligatorio
    fn end_decision(active_trip: Option<Trip>) -> Result<Trip, AppError> {
        active_trip.ok_or_else(|| AppError::Conflict(NO_ACTIVE_TRIP_MESSAGE.to_string()))
    }

    pub async fn start_trip(&self, user_id: Uuid) -> Result<DriverDashboardResponse, AppError> {
        let assignment = self.assignments.find_active_by_driver(user_id).await?;
        let active_trip = self.trips.find_active_by_driver(user_id).await?;
        let (operator_id, vehicle_id) =
            Self::start_decision(assignment.as_ref(), active_trip.as_ref())?;

        self.trips.create(operator_id, vehicle_id, user_id).await?;

        self.dashboard(user_id).await
    }

    pub async fn end_trip(&self, user_id: Uuid) -> Result<DriverDashboardResponse, AppError> {
        let active_trip =
            Self::end_decision(self.trips.find_active_by_driver(user_id).await?)?;

        // None aquí significa que la fila cambió en el medio; misma
        // respuesta que no tener trip activo.
        Self::end_decision(self.trips.complete(active_trip.id).await?)?;

        self.dashboard(user_id).await
    }

    /// El logging de ad-plays es un stub reconocido: exige un trip
    /// activo pero no escribe nada.
    pub async fn log_ad_play(&self, user_id: Uuid) -> Result<ApiResponse<()>, AppError> {
        if self.trips.find_active_by_driver(user_id).await?.is_none() {
            return Err(AppError::Unprocessable("Start a trip first.".to_string()));
        }

        Ok(ApiResponse::message_only(
            "Next step: add campaign picker + validate. (Your trip logging works.)".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn assignment_with_vehicle(vehicle_id: Option<Uuid>) -> DriverAssignment {
        DriverAssignment {
            id: Uuid::new_v4(),
            operator_id: Uuid::new_v4(),
            vehicle_id,
            driver_user_id: Uuid::new_v4(),
            status: "active".to_string(),
            created_at: Utc::now(),
        }
    }

    fn running_trip() -> Trip {
        Trip {
            id: Uuid::new_v4(),
            operator_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            route_id: None,
            driver_user_id: Uuid::new_v4(),
            status: "active".to_string(),
            started_at: Utc::now(),
            ended_at: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn trip_start_requires_an_assignment_with_a_vehicle() {
        match DriverController::start_decision(None, None) {
            Err(AppError::Unprocessable(msg)) => assert_eq!(msg, NO_ASSIGNMENT_MESSAGE),
            other => panic!("expected Unprocessable, got {:?}", other),
        }

        let without_vehicle = assignment_with_vehicle(None);
        match DriverController::start_decision(Some(&without_vehicle), None) {
            Err(AppError::Unprocessable(msg)) => assert_eq!(msg, NO_ASSIGNMENT_MESSAGE),
            other => panic!("expected Unprocessable, got {:?}", other),
        }
    }

    #[test]
    fn trip_start_is_blocked_while_one_runs() {
        let assignment = assignment_with_vehicle(Some(Uuid::new_v4()));
        let running = running_trip();

        match DriverController::start_decision(Some(&assignment), Some(&running)) {
            Err(AppError::Conflict(msg)) => {
                assert_eq!(msg, "A trip is already active. End it before starting another.");
            }
            other => panic!("expected Conflict, got {:?}", other),
        }
    }

    #[test]
    fn trip_start_uses_the_assignment_operator_and_vehicle() {
        let vehicle_id = Uuid::new_v4();
        let assignment = assignment_with_vehicle(Some(vehicle_id));

        let (operator_id, chosen_vehicle) =
            DriverController::start_decision(Some(&assignment), None).unwrap();

        assert_eq!(operator_id, assignment.operator_id);
        assert_eq!(chosen_vehicle, vehicle_id);
    }

    #[test]
    fn trip_end_requires_an_active_trip() {
        match DriverController::end_decision(None) {
            Err(AppError::Conflict(msg)) => assert_eq!(msg, NO_ACTIVE_TRIP_MESSAGE),
            other => panic!("expected Conflict, got {:?}", other),
        }

        let running = running_trip();
        let ended = DriverController::end_decision(Some(running.clone())).unwrap();
        assert_eq!(ended.id, running.id);
    }
}
