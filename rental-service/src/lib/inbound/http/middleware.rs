use std::sync::Arc;

use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::models::RoleName;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiErrorData;

/// State of one `authorize` layer: who verifies tokens and which role, if
/// any, the guarded routes demand.
#[derive(Clone)]
pub struct AccessGuard {
    auth_service: Arc<dyn AuthServicePort>,
    required_role: Option<RoleName>,
}

impl AccessGuard {
    /// Accept any validly signed, unexpired token.
    pub fn any_role(auth_service: Arc<dyn AuthServicePort>) -> Self {
        Self {
            auth_service,
            required_role: None,
        }
    }

    /// Accept only tokens whose role is `role`.
    pub fn require(auth_service: Arc<dyn AuthServicePort>, role: RoleName) -> Self {
        Self {
            auth_service,
            required_role: Some(role),
        }
    }
}

/// Middleware that validates the bearer token and adds its claims to request extensions.
///
/// Every failure ends the request here with 401; the inner handler never runs.
pub async fn authorize(
    State(guard): State<AccessGuard>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = guard
        .auth_service
        .authorize(bearer_token(&req), guard.required_role)
        .map_err(|e| {
            tracing::warn!(
                error = %e,
                required_role = ?guard.required_role,
                path = %req.uri().path(),
                "Authorization failed"
            );
            ApiError::Unauthorized(ApiErrorData::from(&e))
        })?;

    tracing::debug!(user_id = %claims.id, role = %claims.role.name, "Request authorized");
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Token part of an `Authorization: Bearer <token>` header.
fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
}
