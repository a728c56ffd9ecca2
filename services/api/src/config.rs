//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    pub cors_origin: String,
    /// Artificial latency of the simulated link unfurl.
    pub preview_delay: Duration,
    /// Generations still pending after this long fail with a timeout.
    pub preview_timeout: Duration,
    pub seed_collections: bool,
    /// Fixes every random choice when set.
    pub random_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            log_level: Level::INFO,
            cors_origin: "http://localhost:8081".to_string(),
            preview_delay: Duration::from_millis(1200),
            preview_timeout: Duration::from_millis(10_000),
            seed_collections: true,
            random_seed: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source; unset keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        // --- Server Settings ---
        let bind_address = parse_or(&lookup, "BIND_ADDRESS", defaults.bind_address)?;

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let cors_origin = lookup("CORS_ORIGIN").unwrap_or(defaults.cors_origin);

        // --- Preview Generation Settings ---
        let preview_delay = Duration::from_millis(parse_or(
            &lookup,
            "PREVIEW_DELAY_MS",
            defaults.preview_delay.as_millis() as u64,
        )?);
        let preview_timeout = Duration::from_millis(parse_or(
            &lookup,
            "PREVIEW_TIMEOUT_MS",
            defaults.preview_timeout.as_millis() as u64,
        )?);
        if preview_timeout.is_zero() {
            return Err(ConfigError::InvalidValue(
                "PREVIEW_TIMEOUT_MS".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        // --- Collection Settings ---
        let seed_collections = parse_or(&lookup, "SEED_COLLECTIONS", defaults.seed_collections)?;
        let random_seed = lookup("RANDOM_SEED")
            .map(|raw| parse_value("RANDOM_SEED", &raw))
            .transpose()?;

        Ok(Self {
            bind_address,
            log_level,
            cors_origin,
            preview_delay,
            preview_timeout,
            seed_collections,
            random_seed,
        })
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidValue(key.to_string(), e.to_string()))
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}
