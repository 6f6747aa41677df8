use serde::Serialize;

// Adónde debe navegar el cliente después de resolver el rol del caller
#[derive(Debug, Serialize)]
pub struct RouteMeResponse {
    pub destination: String,
    pub role: Option<String>,
}
