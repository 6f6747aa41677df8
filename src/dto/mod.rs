//! DTOs de requests y responses
//!
//! Formas de wire de cada dashboard más la response genérica
//! compartida.

pub mod admin_dto;
pub mod advertiser_dto;
pub mod auth_dto;
pub mod driver_dto;
pub mod operator_dto;
pub mod response;
pub mod role_dto;
pub mod venue_dto;
