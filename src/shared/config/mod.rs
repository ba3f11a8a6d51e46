//! Application configuration module
//!
//! `AppConfig` is loaded once at startup from the environment (after
//! `dotenv`) and then handed to the server by value. Tests build it with
//! [`AppConfig::builder`].
//!
//! # Environment
//!
//! | Variable | Default |
//! |---|---|
//! | `JWT_SECRET` | required |
//! | `DATABASE_URL` | `sqlite://quillfeed.db?mode=rwc` |
//! | `IMAGE_DIR` | `images` |
//! | `SERVER_PORT` | `8080` |
//! | `BCRYPT_COST` | `12` |

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://quillfeed.db?mode=rwc";
pub const DEFAULT_IMAGE_DIR: &str = "images";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Session tokens expire one hour after issue
pub const TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// HS256 signing secret for session tokens
    pub jwt_secret: String,
    /// sqlx SQLite connection URL
    pub database_url: String,
    /// Directory uploaded images are written to and served from
    pub image_dir: PathBuf,
    /// Port bound on 0.0.0.0
    pub port: u16,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Lifetime of issued session tokens
    pub token_ttl: Duration,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("jwt_secret", &"<redacted>")
            .field("database_url", &self.database_url)
            .field("image_dir", &self.image_dir)
            .field("port", &self.port)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from process environment variables
    ///
    /// # Errors
    /// * `ConfigError::MissingVar` - `JWT_SECRET` is unset or empty
    /// * `ConfigError::InvalidVar` - a numeric variable does not parse or is out of range
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(dir) = lookup("IMAGE_DIR") {
            builder = builder.image_dir(dir);
        }
        if let Some(port) = lookup("SERVER_PORT") {
            let port = port.trim().parse::<u16>().map_err(|e| ConfigError::InvalidVar {
                var: "SERVER_PORT",
                reason: e.to_string(),
            })?;
            builder = builder.port(port);
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            let cost = cost.trim().parse::<u32>().map_err(|e| ConfigError::InvalidVar {
                var: "BCRYPT_COST",
                reason: e.to_string(),
            })?;
            builder = builder.bcrypt_cost(cost);
        }

        builder.build()
    }

    /// Socket address the server binds to
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingVar("JWT_SECRET"));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidVar {
                var: "BCRYPT_COST",
                reason: format!("{} is outside 4..=31", self.bcrypt_cost),
            });
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    jwt_secret: Option<String>,
    database_url: Option<String>,
    image_dir: Option<PathBuf>,
    port: Option<u16>,
    bcrypt_cost: Option<u32>,
}

impl AppConfigBuilder {
    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the image directory
    pub fn image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.image_dir = Some(dir.into());
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the bcrypt cost
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingVar("JWT_SECRET"))?,
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            image_dir: self
                .image_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGE_DIR)),
            port: self.port.unwrap_or(DEFAULT_PORT),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
            token_ttl: TOKEN_TTL,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required variable: {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: {reason}")]
    InvalidVar { var: &'static str, reason: String },
}
