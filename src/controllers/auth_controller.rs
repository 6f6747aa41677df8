use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;

use crate::dto::auth_dto::{
    LoginRequest, LoginResponse, MeResponse, SignupRequest, UserSummary,
};
use crate::dto::response::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::profile::Role;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};
use crate::utils::validation::validate_email;

pub struct AuthController {
    repository: UserRepository,
    jwt_config: JwtConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, jwt_config: JwtConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            jwt_config,
        }
    }

    pub async fn signup(
        &self,
        request: SignupRequest,
    ) -> Result<ApiResponse<UserSummary>, AppError> {
        let email = request.email.trim();

        if email.is_empty() || request.password.trim().is_empty() {
            return Err(AppError::BadRequest("Email and password required.".to_string()));
        }

        validate_email(email)
            .map_err(|_| AppError::BadRequest("Invalid email format".to_string()))?;

        // El rol pedido es opcional; admin nunca se otorga aquí.
        let role = match request.role.as_deref() {
            None => Role::Passenger,
            Some(requested) => Role::assignable_from_signup(requested).ok_or_else(|| {
                AppError::Unprocessable(format!(
                    "Role '{}' is not available at signup",
                    requested
                ))
            })?,
        };

        if self.repository.email_exists(email).await? {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        let user = self
            .repository
            .create_with_profile(email, &password_hash, role.as_str())
            .await?;

        Ok(ApiResponse::success_with_message(
            UserSummary {
                id: user.id,
                email: user.email,
                role: Some(role.as_str().to_string()),
            },
            "Account created. You can now login.".to_string(),
        ))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        let email = request.email.trim();

        // Un solo mensaje genérico para email desconocido y password incorrecto.
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

        let valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Invalid email or password".to_string()));
        }

        let role = self
            .repository
            .find_profile_by_user(user.id)
            .await?
            .map(|profile| profile.role);

        let token = generate_token(user.id, &user.email, &self.jwt_config)?;

        Ok(LoginResponse::new(
            token,
            self.jwt_config.expiration,
            UserSummary {
                id: user.id,
                email: user.email,
                role,
            },
        ))
    }

    /// Los tokens son stateless; el sign-out es un acknowledgement y
    /// el cliente descarta su copia.
    pub fn logout(&self) -> ApiResponse<()> {
        ApiResponse::message_only("Signed out".to_string())
    }

    /// El principal de la sesión tal como lo resolvió el middleware
    pub fn session(&self, user: &AuthenticatedUser) -> ApiResponse<UserSummary> {
        ApiResponse::success(UserSummary {
            id: user.user_id,
            email: user.email.clone(),
            role: user.role.clone(),
        })
    }

    pub async fn me(&self, user: &AuthenticatedUser) -> Result<ApiResponse<MeResponse>, AppError> {
        let profile = self.repository.find_profile_by_user(user.user_id).await?;

        Ok(ApiResponse::success(MeResponse {
            user: UserSummary {
                id: user.user_id,
                email: user.email.clone(),
                role: user.role.clone(),
            },
            profile,
        }))
    }
}
