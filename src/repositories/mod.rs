//! Repositories
//!
//! Todo el SQL vive aquí; las queries usan binds en runtime y se
//! limitan al principal o al operator dueño donde aplica ownership.

pub mod advertiser_repository;
pub mod assignment_repository;
pub mod campaign_repository;
pub mod operator_repository;
pub mod route_repository;
pub mod trip_repository;
pub mod user_repository;
pub mod vehicle_repository;
pub mod venue_repository;
