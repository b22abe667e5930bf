use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::RoleName;
use crate::domain::user::models::SessionClaims;
use crate::domain::user::models::UserProfile;
use crate::inbound::http::router::AppState;

/// Current user, resolved from the claims placed by the `authorize` middleware.
pub async fn get_user(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
) -> Result<ApiSuccess<GetUserResponseData>, ApiError> {
    state
        .auth_service
        .get_user(&claims.id)
        .await
        .map_err(ApiError::from)
        .map(|ref profile| ApiSuccess::new(StatusCode::OK, profile.into()))
}

/// User record as exposed to clients, without the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserResponseData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub role_id: i32,
    pub role: RoleData,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleData {
    pub id: i32,
    pub name: RoleName,
}

impl From<&UserProfile> for GetUserResponseData {
    fn from(profile: &UserProfile) -> Self {
        let user = &profile.user;
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.as_str().to_string(),
            image: user.image.clone(),
            role_id: user.role_id.0,
            role: RoleData {
                id: profile.role.id.0,
                name: profile.role.name,
            },
            created_at: user.created_at,
        }
    }
}
