use serde::Deserialize;
use serde::Serialize;

use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Password checks and token signing behind one shared secret.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),
}

impl Authenticator {
    /// Authenticator hashing new passwords with bcrypt at the default cost.
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self::with_hasher(jwt_secret, PasswordHasher::new())
    }

    pub fn with_hasher(jwt_secret: &[u8], password_hasher: PasswordHasher) -> Self {
        Self {
            password_hasher,
            jwt_handler: JwtHandler::new(jwt_secret),
        }
    }

    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check `password` against a stored bcrypt or argon2 digest.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Digest is malformed or of an unknown format
    pub fn authenticate(&self, password: &str, stored_hash: &str) -> Result<(), AuthenticationError> {
        if self.password_hasher.verify(password, stored_hash)? {
            Ok(())
        } else {
            Err(AuthenticationError::InvalidCredentials)
        }
    }

    pub fn generate_token<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        self.jwt_handler.encode(claims)
    }

    /// Verify signature and expiry, then decode the claims.
    pub fn validate_token<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, JwtError> {
        self.jwt_handler.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::jwt::TokenWindow;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Session {
        sub: String,
        exp: i64,
    }

    fn authenticator() -> Authenticator {
        Authenticator::with_hasher(SECRET, PasswordHasher::bcrypt(4))
    }

    #[test]
    fn test_authenticate_matching_password() {
        let authenticator = authenticator();
        let hash = authenticator.hash_password("pass_word!").unwrap();

        assert!(authenticator.authenticate("pass_word!", &hash).is_ok());
    }

    #[test]
    fn test_authenticate_wrong_password() {
        let authenticator = authenticator();
        let hash = authenticator.hash_password("pass_word!").unwrap();

        assert!(matches!(
            authenticator.authenticate("Pass_word!", &hash),
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_unknown_digest() {
        assert!(matches!(
            authenticator().authenticate("pass_word!", "plaintext"),
            Err(AuthenticationError::PasswordError(_))
        ));
    }

    #[test]
    fn test_authenticate_argon2_digest_with_bcrypt_hasher() {
        let digest = PasswordHasher::argon2id().hash("pass_word!").unwrap();

        assert!(authenticator().authenticate("pass_word!", &digest).is_ok());
    }

    #[test]
    fn test_token_round_trip() {
        let authenticator = authenticator();
        let session = Session {
            sub: "user123".to_string(),
            exp: TokenWindow::starting_now(Duration::hours(1)).expires_at,
        };

        let token = authenticator.generate_token(&session).unwrap();
        let decoded: Session = authenticator.validate_token(&token).unwrap();

        assert_eq!(decoded, session);
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let session = Session {
            sub: "user123".to_string(),
            exp: TokenWindow::starting_now(Duration::hours(1)).expires_at,
        };
        let token = JwtHandler::new(b"another_secret_key_at_least_32_bytes")
            .encode(&session)
            .unwrap();

        assert!(matches!(
            authenticator().validate_token::<Session>(&token),
            Err(JwtError::InvalidToken(_))
        ));
    }
}
