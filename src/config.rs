//! Runtime configuration, read from the process environment.

use std::net::SocketAddr;

use thiserror::Error;

use crate::store::StoreConfig;

pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_HOST: &str = "POSTGRES_HOST";
pub const ENV_PORT: &str = "POSTGRES_PORT";
pub const ENV_USER: &str = "POSTGRES_USER";
pub const ENV_PASSWORD: &str = "POSTGRES_PASSWORD";
pub const ENV_DATABASE: &str = "POSTGRES_DB";
pub const ENV_LISTEN_ADDR: &str = "BOARD_LISTEN_ADDR";
pub const ENV_INIT_SCHEMA: &str = "BOARD_INIT_SCHEMA";

// Names used by earlier deployments of the board, read when the
// POSTGRES_* counterpart is unset
pub const LEGACY_ENV_HOST: &str = "MYSQL_HOST";
pub const LEGACY_ENV_USER: &str = "MYSQL_USER";
pub const LEGACY_ENV_PASSWORD: &str = "MYSQL_PASSWORD";
pub const LEGACY_ENV_DATABASE: &str = "MYSQL_DATABASE";

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Invalid connection string: {0}")]
    InvalidConnectionString(String),
}

/// Everything the server needs to start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub listen_addr: SocketAddr,
    pub init_schema: bool,
    pub store: StoreConfig,
}

impl BoardConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// `DATABASE_URL` wins over the individual `POSTGRES_*` variables when
    /// both are set. Each `POSTGRES_*` variable falls back to its `MYSQL_*`
    /// name, then to the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = match lookup(ENV_DATABASE_URL) {
            Some(url) => StoreConfig::from_connection_string(&url)?,
            None => {
                let defaults = StoreConfig::default();
                let lookup_either = |key: &str, legacy: &str| lookup(key).or_else(|| lookup(legacy));
                StoreConfig {
                    host: lookup_either(ENV_HOST, LEGACY_ENV_HOST).unwrap_or(defaults.host),
                    port: match lookup(ENV_PORT) {
                        Some(value) => parse_value(ENV_PORT, value)?,
                        None => defaults.port,
                    },
                    database: lookup_either(ENV_DATABASE, LEGACY_ENV_DATABASE)
                        .unwrap_or(defaults.database),
                    user: lookup_either(ENV_USER, LEGACY_ENV_USER).unwrap_or(defaults.user),
                    password: lookup_either(ENV_PASSWORD, LEGACY_ENV_PASSWORD)
                        .unwrap_or(defaults.password),
                }
            }
        };

        let listen_addr = parse_value(
            ENV_LISTEN_ADDR,
            lookup(ENV_LISTEN_ADDR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
        )?;

        let init_schema = match lookup(ENV_INIT_SCHEMA) {
            Some(value) => parse_bool(ENV_INIT_SCHEMA, value)?,
            None => true,
        };

        Ok(Self {
            listen_addr,
            init_schema,
            store,
        })
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value }),
    }
}
