pub mod admin_controller;
pub mod advertiser_controller;
pub mod auth_controller;
pub mod driver_controller;
pub mod operator_controller;
pub mod role_controller;
pub mod venue_controller;
