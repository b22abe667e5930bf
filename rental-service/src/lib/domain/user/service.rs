use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::TokenWindow;
use chrono::Duration;
use chrono::Utc;

use crate::domain::user::models::AccessToken;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::Role;
use crate::domain::user::models::RoleName;
use crate::domain::user::models::SessionClaims;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;
use crate::user::errors::AuthError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::RoleRepository;
use crate::user::ports::UserRepository;

/// Domain service implementation for authentication operations.
///
/// Sequences the credential store, the password hasher and the token codec.
/// Holds no mutable state of its own.
pub struct AuthService<UR, RR>
where
    UR: UserRepository,
    RR: RoleRepository,
{
    users: Arc<UR>,
    roles: Arc<RR>,
    authenticator: Arc<Authenticator>,
    token_lifetime: Duration,
}

impl<UR, RR> AuthService<UR, RR>
where
    UR: UserRepository,
    RR: RoleRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `users` - User persistence implementation
    /// * `roles` - Role lookup implementation
    /// * `authenticator` - Password hasher and token codec
    /// * `token_lifetime` - Validity of issued access tokens
    pub fn new(
        users: Arc<UR>,
        roles: Arc<RR>,
        authenticator: Arc<Authenticator>,
        token_lifetime: Duration,
    ) -> Self {
        Self {
            users,
            roles,
            authenticator,
            token_lifetime,
        }
    }

    /// Sign an access token describing `user` and `role`.
    pub fn create_token_from_user(&self, user: &User, role: &Role) -> Result<AccessToken, AuthError> {
        let claims = self.claims_for(user, role);
        let token = self.authenticator.generate_token(&claims)?;
        Ok(AccessToken::new(token))
    }

    fn claims_for(&self, user: &User, role: &Role) -> SessionClaims {
        SessionClaims::for_user(user, role, TokenWindow::starting_now(self.token_lifetime))
    }

    async fn hash_password(&self, password: String) -> Result<String, AuthError> {
        let authenticator = Arc::clone(&self.authenticator);

        // bcrypt is CPU bound; keep it off the async workers
        tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
            .await
            .map_err(|e| AuthError::Unknown(format!("Password hashing task failed: {}", e)))?
            .map_err(AuthError::from)
    }
}

#[async_trait]
impl<UR, RR> AuthServicePort for AuthService<UR, RR>
where
    UR: UserRepository,
    RR: RoleRepository,
{
    async fn login(&self, command: LoginCommand) -> Result<AccessToken, AuthError> {
        let user = self
            .users
            .find_by_email(&command.email)
            .await?
            .ok_or_else(|| AuthError::EmailNotRegistered(command.email.clone()))?;

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let password_hash = user.password_hash.clone();

        tokio::task::spawn_blocking(move || authenticator.authenticate(&password, &password_hash))
            .await
            .map_err(|e| AuthError::Unknown(format!("Password verification task failed: {}", e)))?
            .map_err(|e| {
                tracing::warn!(user_id = %user.id, error = %e, "Login rejected");
                match e {
                    AuthenticationError::InvalidCredentials => AuthError::WrongPassword,
                    AuthenticationError::PasswordError(err) => AuthError::Password(err),
                }
            })?;

        let role = self
            .roles
            .find_by_id(&user.role_id)
            .await?
            .ok_or(AuthError::RecordNotFound("Role"))?;

        let token = self.create_token_from_user(&user, &role)?;
        tracing::info!(user_id = %user.id, role = %role.name, "User logged in");

        Ok(token)
    }

    async fn register(&self, command: RegisterCommand) -> Result<AccessToken, AuthError> {
        if self
            .users
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(AuthError::EmailAlreadyTaken(command.email.to_string()));
        }

        let role = self
            .roles
            .find_by_name(RoleName::Customer)
            .await?
            .ok_or_else(|| {
                tracing::error!(role = %RoleName::Customer, "Default role missing from role table");
                AuthError::RoleNotProvisioned(RoleName::Customer)
            })?;

        let password_hash = self.hash_password(command.password).await?;

        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            image: None,
            role_id: role.id,
            created_at: Utc::now(),
        };

        // The store enforces email uniqueness, covering registrations racing past the check above
        let created_user = self.users.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        self.create_token_from_user(&created_user, &role)
    }

    async fn get_user(&self, id: &UserId) -> Result<UserProfile, AuthError> {
        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or(AuthError::RecordNotFound("User"))?;

        let role = self
            .roles
            .find_by_id(&user.role_id)
            .await?
            .ok_or(AuthError::RecordNotFound("Role"))?;

        Ok(UserProfile { user, role })
    }

    fn authorize(
        &self,
        token: Option<&str>,
        required_role: Option<RoleName>,
    ) -> Result<SessionClaims, AuthError> {
        let token = token.ok_or(AuthError::MissingToken)?;
        let claims: SessionClaims = self.authenticator.validate_token(token)?;

        match required_role {
            Some(required) if claims.role.name != required => {
                Err(AuthError::InsufficientAccess(claims.role.name))
            }
            _ => Ok(claims),
        }
    }
}
