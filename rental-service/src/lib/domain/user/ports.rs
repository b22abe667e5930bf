use async_trait::async_trait;

use crate::domain::user::models::AccessToken;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::Role;
use crate::domain::user::models::RoleId;
use crate::domain::user::models::RoleName;
use crate::domain::user::models::SessionClaims;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;
use crate::user::errors::AuthError;

/// Port for authentication and account operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Exchange credentials for an access token.
    ///
    /// # Arguments
    /// * `command` - Lowercased email and plaintext password
    ///
    /// # Errors
    /// * `EmailNotRegistered` - No account for this email
    /// * `WrongPassword` - Password does not match
    /// * `RecordNotFound` - The account's role does not exist
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, command: LoginCommand) -> Result<AccessToken, AuthError>;

    /// Create a customer account and return an access token for it.
    ///
    /// # Errors
    /// * `EmailAlreadyTaken` - Email is already registered
    /// * `RoleNotProvisioned` - The CUSTOMER role is missing from storage
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterCommand) -> Result<AccessToken, AuthError>;

    /// Load a user and its role.
    ///
    /// # Errors
    /// * `RecordNotFound` - User or role does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: &UserId) -> Result<UserProfile, AuthError>;

    /// Verify a bearer token and, when `required_role` is set, check the role it carries.
    ///
    /// # Errors
    /// * `MissingToken`, `InvalidToken`, `TokenExpired` - Token rejected
    /// * `InsufficientAccess` - Token role differs from `required_role`
    fn authorize(
        &self,
        token: Option<&str>,
        required_role: Option<RoleName>,
    ) -> Result<SessionClaims, AuthError>;
}

/// Persistence operations for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyTaken` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, AuthError>;

    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError>;

    /// Retrieve user by lowercased email address.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;
}

/// Read access to role reference data.
#[async_trait]
pub trait RoleRepository: Send + Sync + 'static {
    async fn find_by_id(&self, id: &RoleId) -> Result<Option<Role>, AuthError>;

    async fn find_by_name(&self, name: RoleName) -> Result<Option<Role>, AuthError>;
}
