use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Default bcrypt work factor (2^10 rounds).
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Algorithm used when producing new digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// bcrypt with the given cost factor.
    Bcrypt { cost: u32 },
    /// Argon2id with the crate's default parameters.
    Argon2id,
}

/// One-way password hashing.
///
/// New digests are produced with the configured [`HashAlgorithm`]. Verification
/// detects the algorithm from the digest itself, so digests written under a
/// previous configuration keep verifying.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    algorithm: HashAlgorithm,
}

impl PasswordHasher {
    /// Create a bcrypt hasher with [`DEFAULT_BCRYPT_COST`].
    pub fn new() -> Self {
        Self::bcrypt(DEFAULT_BCRYPT_COST)
    }

    /// Create a bcrypt hasher with an explicit cost factor.
    ///
    /// # Arguments
    /// * `cost` - bcrypt work factor, between 4 and 31
    pub fn bcrypt(cost: u32) -> Self {
        Self {
            algorithm: HashAlgorithm::Bcrypt { cost },
        }
    }

    /// Create an Argon2id hasher.
    pub fn argon2id() -> Self {
        Self {
            algorithm: HashAlgorithm::Argon2id,
        }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Hash a plaintext password.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Self-describing digest (bcrypt modular crypt format or Argon2 PHC string)
    ///
    /// # Errors
    /// * `HashingFailed` - Invalid cost factor or hashing backend failure
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        match self.algorithm {
            HashAlgorithm::Bcrypt { cost } => bcrypt::hash(password, cost)
                .map_err(|e| PasswordError::HashingFailed(e.to_string())),
            HashAlgorithm::Argon2id => {
                let salt = SaltString::generate(&mut OsRng);

                Argon2::default()
                    .hash_password(password.as_bytes(), &salt)
                    .map(|hash| hash.to_string())
                    .map_err(|e| PasswordError::HashingFailed(e.to_string()))
            }
        }
    }

    /// Verify a password against a stored digest.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored digest, bcrypt (`$2a$`, `$2b$`, `$2y$`) or Argon2 (`$argon2`)
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `UnsupportedFormat` - Digest was produced by neither bcrypt nor Argon2
    /// * `VerificationFailed` - Digest is malformed
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        if hash.starts_with("$argon2") {
            let parsed_hash = PasswordHash::new(hash).map_err(|e| {
                PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
            })?;

            Ok(Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok())
        } else if hash.starts_with("$2") {
            bcrypt::verify(password, hash)
                .map_err(|e| PasswordError::VerificationFailed(e.to_string()))
        } else {
            Err(PasswordError::UnsupportedFormat)
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
