//! Módulo de services
//!
//! Lógica de negocio que vive fuera de un ciclo request/response:
//! la capa de policy de aprobación y el bootstrap de arranque.

pub mod bootstrap;
pub mod policy;
