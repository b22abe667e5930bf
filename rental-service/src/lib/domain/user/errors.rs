use thiserror::Error;

use crate::domain::user::models::RoleName;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for role names outside the known access levels
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleNameError {
    #[error("Unknown role: {0}")]
    Unknown(String),
}

/// Top-level error for authentication and account operations
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("{0} is not registered")]
    EmailNotRegistered(String),

    #[error("Password is not correct")]
    WrongPassword,

    #[error("{0} is already taken")]
    EmailAlreadyTaken(String),

    /// Carries the name of the missing record kind ("User", "Role").
    #[error("{0} not found")]
    RecordNotFound(&'static str),

    #[error("Access forbidden")]
    InsufficientAccess(RoleName),

    #[error("Authorization token is missing")]
    MissingToken,

    #[error("Authorization token is invalid: {0}")]
    InvalidToken(String),

    #[error("Authorization token has expired")]
    TokenExpired,

    // Infrastructure errors
    #[error("Required role {0} is not provisioned")]
    RoleNotProvisioned(RoleName),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token signing failed: {0}")]
    TokenSigning(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AuthError {
    /// Stable identifier exposed to clients as `error.name`.
    pub fn name(&self) -> &'static str {
        match self {
            AuthError::InvalidEmail(_) => "InvalidEmailError",
            AuthError::EmailNotRegistered(_) => "EmailNotRegisteredError",
            AuthError::WrongPassword => "WrongPasswordError",
            AuthError::EmailAlreadyTaken(_) => "EmailAlreadyTakenError",
            AuthError::RecordNotFound(_) => "RecordNotFoundError",
            AuthError::InsufficientAccess(_) => "InsufficientAccessError",
            AuthError::MissingToken | AuthError::InvalidToken(_) => "InvalidTokenError",
            AuthError::TokenExpired => "TokenExpiredError",
            AuthError::RoleNotProvisioned(_)
            | AuthError::Password(_)
            | AuthError::TokenSigning(_)
            | AuthError::DatabaseError(_)
            | AuthError::Unknown(_) => "InternalServerError",
        }
    }

    /// Structured context exposed to clients as `error.details`.
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AuthError::EmailNotRegistered(email) | AuthError::EmailAlreadyTaken(email) => {
                Some(serde_json::json!({ "email": email }))
            }
            AuthError::InsufficientAccess(role) => Some(serde_json::json!({
                "role": role,
                "reason": format!("{} is not allowed to perform this operation", role),
            })),
            _ => None,
        }
    }
}

impl From<auth::JwtError> for AuthError {
    fn from(err: auth::JwtError) -> Self {
        match err {
            auth::JwtError::TokenExpired => AuthError::TokenExpired,
            auth::JwtError::InvalidToken(reason) => AuthError::InvalidToken(reason),
            auth::JwtError::EncodingFailed(reason) => AuthError::TokenSigning(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_access_details_name_the_role() {
        let err = AuthError::InsufficientAccess(RoleName::Customer);
        let details = err.details().unwrap();

        assert_eq!(err.name(), "InsufficientAccessError");
        assert_eq!(details["role"], "CUSTOMER");
        assert!(details["reason"].as_str().unwrap().contains("CUSTOMER"));
    }

    #[test]
    fn test_email_not_registered_message_names_email() {
        let err = AuthError::EmailNotRegistered("a@x.com".to_string());
        assert_eq!(err.to_string(), "a@x.com is not registered");
        assert_eq!(err.details().unwrap()["email"], "a@x.com");
    }

    #[test]
    fn test_jwt_error_mapping() {
        assert!(matches!(
            AuthError::from(auth::JwtError::TokenExpired),
            AuthError::TokenExpired
        ));
        assert!(matches!(
            AuthError::from(auth::JwtError::InvalidToken("bad".to_string())),
            AuthError::InvalidToken(_)
        ));
    }
}
