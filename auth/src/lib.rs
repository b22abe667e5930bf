//! Authentication utilities library
//!
//! Provides the cryptographic building blocks used by the rental service:
//! - Password hashing (bcrypt by default, Argon2id available)
//! - JWT token generation and validation (HS256, `exp` required)
//! - Authentication coordination
//!
//! The library knows nothing about users or roles. Services define their own
//! claims type and hand it to [`Authenticator`] or [`JwtHandler`].
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::bcrypt(4);
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{JwtHandler, TokenWindow};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Session {
//!     sub: String,
//!     exp: i64,
//! }
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let window = TokenWindow::starting_now(chrono::Duration::hours(1));
//! let token = handler
//!     .encode(&Session { sub: "user123".into(), exp: window.expires_at })
//!     .unwrap();
//! let decoded: Session = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenWindow;
pub use password::HashAlgorithm;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::DEFAULT_BCRYPT_COST;
