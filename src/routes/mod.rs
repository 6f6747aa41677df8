pub mod admin_routes;
pub mod advertiser_routes;
pub mod auth_routes;
pub mod driver_routes;
pub mod operator_routes;
pub mod passenger_routes;
pub mod role_routes;
pub mod venue_routes;
