use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::profile::Profile;

// Request de signup; el rol es opcional y admin nunca se puede pedir
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub role: Option<String>,
}

// Request de login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// Resumen del principal que devuelven login, session y me
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
    pub role: Option<String>,
}

// Response de login con el access token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub user: UserSummary,
}

impl LoginResponse {
    pub fn new(access_token: String, expires_in: u64, user: UserSummary) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// Usuario actual junto con su fila de profile
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserSummary,
    pub profile: Option<Profile>,
}
