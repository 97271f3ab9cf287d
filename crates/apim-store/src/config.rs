//! Store configuration
//!
//! Resolved once at process startup and passed into `db::connect`. Nothing
//! in the adapters reads the environment.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

pub const DATABASE_URL: &str = "APIM_DATABASE_URL";
pub const FALLBACK_DATABASE_URL: &str = "DATABASE_URL";
pub const MAX_CONNECTIONS: &str = "APIM_DB_MAX_CONNECTIONS";
pub const MIN_CONNECTIONS: &str = "APIM_DB_MIN_CONNECTIONS";
pub const CONNECT_TIMEOUT_MS: &str = "APIM_DB_CONNECT_TIMEOUT_MS";
pub const IDLE_TIMEOUT_MS: &str = "APIM_DB_IDLE_TIMEOUT_MS";
pub const MAX_LIFETIME_MS: &str = "APIM_DB_MAX_LIFETIME_MS";
pub const RUN_MIGRATIONS: &str = "APIM_DB_RUN_MIGRATIONS";

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required setting {0} (or {1})")]
    Missing(&'static str, &'static str),

    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Connection settings for the document store
#[derive(Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// How long to wait for a pooled connection
    pub connect_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
    /// Apply embedded migrations right after connecting
    pub run_migrations: bool,
}

impl StoreConfig {
    /// Default settings for a database URL
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            min_connections: 0,
            connect_timeout: Duration::from_millis(DEFAULT_CONNECT_TIMEOUT_MS),
            idle_timeout: None,
            max_lifetime: None,
            run_migrations: false,
        }
    }

    /// Read the settings from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the settings through `lookup`, which returns the value of a key
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL)
            .or_else(|| lookup(FALLBACK_DATABASE_URL))
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing(DATABASE_URL, FALLBACK_DATABASE_URL))?;

        let mut config = Self::new(database_url);

        if let Some(value) = parse::<u32, _>(&lookup, MAX_CONNECTIONS)? {
            config.max_connections = value;
        }
        if let Some(value) = parse::<u32, _>(&lookup, MIN_CONNECTIONS)? {
            config.min_connections = value;
        }
        if let Some(ms) = parse::<u64, _>(&lookup, CONNECT_TIMEOUT_MS)? {
            config.connect_timeout = Duration::from_millis(ms);
        }
        config.idle_timeout = parse::<u64, _>(&lookup, IDLE_TIMEOUT_MS)?.map(Duration::from_millis);
        config.max_lifetime = parse::<u64, _>(&lookup, MAX_LIFETIME_MS)?.map(Duration::from_millis);

        if let Some(value) = lookup(RUN_MIGRATIONS) {
            config.run_migrations = match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: RUN_MIGRATIONS,
                        value,
                    })
                }
            };
        }

        if config.min_connections > config.max_connections {
            return Err(ConfigError::Invalid {
                key: MIN_CONNECTIONS,
                value: config.min_connections.to_string(),
            });
        }

        Ok(config)
    }
}

fn parse<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

// The URL usually embeds credentials
impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("database_url", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("connect_timeout", &self.connect_timeout)
            .field("idle_timeout", &self.idle_timeout)
            .field("max_lifetime", &self.max_lifetime)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}
