//! Middleware de autenticación JWT
//!
//! El guard de sesión para todas las rutas protegidas: verifica el
//! bearer token, confirma que el principal todavía existe e inyecta
//! el usuario autenticado en las extensions de la request. El rol del
//! profile se relee en cada request para que los cambios de rol
//! apliquen de inmediato.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
    Extension,
};
use sqlx::FromRow;
use uuid::Uuid;

use crate::{
    models::profile::Role,
    state::AppState,
    utils::errors::AppError,
    utils::jwt::{extract_token_from_header, verify_token, JwtConfig},
};

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    /// String crudo del rol; `None` significa que el principal no tiene fila de profile
    pub role: Option<String>,
}

impl AuthenticatedUser {
    pub fn parsed_role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::from_str)
    }

    pub fn is_admin(&self) -> bool {
        self.parsed_role() == Some(Role::Admin)
    }
}

#[derive(Debug, FromRow)]
struct PrincipalRow {
    id: Uuid,
    email: String,
    role: Option<String>,
}

/// Middleware del guard de sesión.
///
/// Los checks del token corren antes de cualquier acceso a la base de
/// datos; una request sin token válido se rechaza con 401 sin tocar
/// ninguna tabla.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Authorization token required".to_string()))?;

    let token = extract_token_from_header(auth_header)
        .map_err(|_| AppError::Unauthorized("Invalid authorization header".to_string()))?;

    let jwt_config = JwtConfig::from(&state.config);
    let claims = verify_token(token, &jwt_config)
        .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("Invalid user id in token".to_string()))?;

    // Confirmar que el principal sigue existiendo y tomar su rol actual
    let principal = sqlx::query_as::<_, PrincipalRow>(
        r#"
        SELECT u.id, u.email, p.role
        FROM users u
        LEFT JOIN profiles p ON p.id = u.id
        WHERE u.id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or_else(|| AppError::Unauthorized("User no longer exists".to_string()))?;

    let authenticated_user = AuthenticatedUser {
        user_id: principal.id,
        email: principal.email,
        role: principal.role,
    };

    request.extensions_mut().insert(authenticated_user);

    Ok(next.run(request).await)
}

/// Middleware para verificar permisos de admin
pub async fn admin_only_middleware(
    Extension(user): Extension<AuthenticatedUser>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    crate::services::policy::require_admin(&user)?;

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    fn user_with_role(role: Option<&str>) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: Uuid::new_v4(),
            email: "who@fika.co.bw".to_string(),
            role: role.map(|r| r.to_string()),
        }
    }

    // Función helper para armar un router mínimo detrás del guard de admin
    fn admin_guarded_app() -> Router {
        Router::new()
            .route("/admin", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn(admin_only_middleware))
    }

    // Función helper para crear una request con el principal ya inyectado
    fn request_as(user: AuthenticatedUser) -> HttpRequest<Body> {
        let mut request = HttpRequest::builder()
            .uri("/admin")
            .body(Body::empty())
            .unwrap();
        request.extensions_mut().insert(user);
        request
    }

    #[test]
    fn admin_detection_parses_the_role_string() {
        assert!(user_with_role(Some("admin")).is_admin());
        assert!(!user_with_role(Some("operator")).is_admin());
        assert!(!user_with_role(Some("administrator")).is_admin());
        assert!(!user_with_role(None).is_admin());
    }

    #[tokio::test]
    async fn admin_guard_rejects_non_admin_principals() {
        for role in [Some("operator"), Some("driver"), Some("venue"), None] {
            let response = admin_guarded_app()
                .oneshot(request_as(user_with_role(role)))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::FORBIDDEN);
        }
    }

    #[tokio::test]
    async fn admin_guard_admits_admin_principals() {
        let response = admin_guarded_app()
            .oneshot(request_as(user_with_role(Some("admin"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
