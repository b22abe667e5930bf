use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::QueryRejection;
use axum::extract::FromRequest;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::car::errors::CarError;
use crate::domain::car::models::Car;
use crate::domain::user::models::AccessToken;
use crate::user::errors::AuthError;

pub mod create_car;
pub mod get_user;
pub mod list_cars;
pub mod login;
pub mod register;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// JSON body extractor whose rejections use the API error shape.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor whose rejections use the API error shape.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(ApiErrorData),
    BadRequest(ApiErrorData),
    NotFound(ApiErrorData),
    Unauthorized(ApiErrorData),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, data) = match self {
            ApiError::InternalServerError(cause) => {
                tracing::error!(error = %cause, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorData::new("InternalServerError", "Internal server error"),
                )
            }
            ApiError::UnprocessableEntity(data) => (StatusCode::UNPROCESSABLE_ENTITY, data),
            ApiError::BadRequest(data) => (StatusCode::BAD_REQUEST, data),
            ApiError::NotFound(data) => (StatusCode::NOT_FOUND, data),
            ApiError::Unauthorized(data) => (StatusCode::UNAUTHORIZED, data),
        };

        (status, Json(ApiErrorBody { error: data })).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::EmailNotRegistered(_) | AuthError::RecordNotFound(_) => {
                ApiError::NotFound(ApiErrorData::from(&err))
            }
            AuthError::WrongPassword
            | AuthError::InsufficientAccess(_)
            | AuthError::MissingToken
            | AuthError::InvalidToken(_)
            | AuthError::TokenExpired => ApiError::Unauthorized(ApiErrorData::from(&err)),
            AuthError::InvalidEmail(_) | AuthError::EmailAlreadyTaken(_) => {
                ApiError::UnprocessableEntity(ApiErrorData::from(&err))
            }
            AuthError::RoleNotProvisioned(_)
            | AuthError::Password(_)
            | AuthError::TokenSigning(_)
            | AuthError::DatabaseError(_)
            | AuthError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<CarError> for ApiError {
    fn from(err: CarError) -> Self {
        match err {
            CarError::InvalidPage(_) => ApiError::UnprocessableEntity(ApiErrorData::new(
                "InvalidPageError",
                err.to_string(),
            )),
            CarError::InvalidCar(_) => ApiError::UnprocessableEntity(ApiErrorData::new(
                "InvalidCarError",
                err.to_string(),
            )),
            CarError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let data = ApiErrorData::new("InvalidRequestBodyError", rejection.body_text());
        match rejection.status() {
            StatusCode::UNPROCESSABLE_ENTITY => ApiError::UnprocessableEntity(data),
            _ => ApiError::BadRequest(data),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(ApiErrorData::new(
            "InvalidQueryError",
            rejection.body_text(),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorData,
}

/// Client-facing error description: `{name, message, details}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiErrorData {
    pub name: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl ApiErrorData {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&AuthError> for ApiErrorData {
    fn from(err: &AuthError) -> Self {
        Self {
            name: err.name().to_string(),
            message: err.to_string(),
            details: err.details(),
        }
    }
}

/// Body returned by login and registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponseData {
    pub access_token: String,
}

impl From<AccessToken> for AccessTokenResponseData {
    fn from(token: AccessToken) -> Self {
        Self {
            access_token: token.into_inner(),
        }
    }
}

/// Car as exposed to clients, shared by listing and creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarData {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub size: String,
    pub image: Option<String>,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Car> for CarData {
    fn from(car: &Car) -> Self {
        Self {
            id: car.id.to_string(),
            name: car.name.clone(),
            price: car.price,
            size: car.size.to_string(),
            image: car.image.clone(),
            available: car.available,
            created_at: car.created_at,
        }
    }
}
