//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any
//! component is constructed.
//!
//! ## Variables
//!
//! ```bash
//! export REDIS_HOST="localhost"   # default: localhost
//! export REDIS_PORT="6379"        # default: 6379
//! export RUST_LOG="info"          # default: info
//! export LOG_FORMAT="text"        # text or json, default: text
//! ```
//!
//! All variables are optional; defaults target a local Redis instance.

use anyhow::{Context, Result};
use std::env;

/// Redis endpoint settings. Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedisProperties {
    pub host: String,
    pub port: u16,
}

impl RedisProperties {
    /// Renders the connection URL consumed by the `redis` crate.
    pub fn url(&self) -> String {
        format!("redis://{}:{}/", self.host, self.port)
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub redis: RedisProperties,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `REDIS_PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self> {
        let redis = Self::load_redis_properties().context("Failed to load Redis configuration")?;

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            redis,
            log_level,
            log_format,
        })
    }

    /// Loads the Redis endpoint from `REDIS_HOST` / `REDIS_PORT`.
    fn load_redis_properties() -> Result<RedisProperties> {
        let host = env::var("REDIS_HOST").unwrap_or_else(|_| "localhost".to_string());

        let port = match env::var("REDIS_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("REDIS_PORT must be a port number, got '{}'", raw))?,
            Err(_) => 6379,
        };

        Ok(RedisProperties { host, port })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `REDIS_HOST` is empty
    /// - `REDIS_PORT` is zero
    /// - `LOG_FORMAT` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.redis.host.is_empty() {
            anyhow::bail!("REDIS_HOST must not be empty");
        }

        if self.redis.port == 0 {
            anyhow::bail!("REDIS_PORT must be in range 1-65535, got 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Redis: {}:{}", self.redis.host, self.redis.port);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
