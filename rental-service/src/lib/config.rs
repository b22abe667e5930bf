use std::env;

use auth::PasswordHasher;
use auth::DEFAULT_BCRYPT_COST;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Ten years.
const MAX_EXPIRATION_HOURS: i64 = 24 * 365 * 10;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub password: PasswordConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DatabaseConfig {
    /// Postgres URL; when absent the service keeps its data in memory.
    pub url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PasswordAlgorithm {
    #[default]
    Bcrypt,
    Argon2id,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    #[serde(default)]
    pub algorithm: PasswordAlgorithm,
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            algorithm: PasswordAlgorithm::default(),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

fn default_bcrypt_cost() -> u32 {
    DEFAULT_BCRYPT_COST
}

impl PasswordConfig {
    /// Hasher used for new passwords. Verification accepts either format.
    pub fn password_hasher(&self) -> PasswordHasher {
        match self.algorithm {
            PasswordAlgorithm::Bcrypt => PasswordHasher::bcrypt(self.bcrypt_cost),
            PasswordAlgorithm::Argon2id => PasswordHasher::argon2id(),
        }
    }
}

impl JwtConfig {
    pub fn token_lifetime(&self) -> chrono::Duration {
        chrono::Duration::hours(self.expiration_hours)
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. `JWT_SIGNATURE_KEY` for the token signing secret
    /// 2. Environment variables (DATABASE__URL, JWT__EXPIRATION_HOURS, etc.)
    /// 3. Environment-specific config file (config/{environment}.toml)
    /// 4. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        Self::load_from(
            &run_mode,
            Environment::default().separator("__"),
            env::var("JWT_SIGNATURE_KEY").ok(),
        )
    }

    fn load_from(
        run_mode: &str,
        environment: Environment,
        signature_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // DATABASE__URL=postgres://... overrides database.url
            .add_source(environment)
            .set_override_option("jwt.secret", signature_key)?
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.is_empty() {
            return Err(ConfigError::Message("jwt.secret must not be empty".into()));
        }
        if !(1..=MAX_EXPIRATION_HOURS).contains(&self.jwt.expiration_hours) {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_hours must be between 1 and {}, got {}",
                MAX_EXPIRATION_HOURS, self.jwt.expiration_hours
            )));
        }
        if !(4..=31).contains(&self.password.bcrypt_cost) {
            return Err(ConfigError::Message(format!(
                "password.bcrypt_cost must be between 4 and 31, got {}",
                self.password.bcrypt_cost
            )));
        }
        Ok(())
    }
}
