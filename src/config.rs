//! Settings read from the environment (after `.env` is loaded).
//!
//! - `DATABASE_URL`: PostgreSQL connection string. Falls back to a local
//!   testing database when unset.
//! - `HOST` (default `127.0.0.1`) and `PORT` (default `8080`).
//! - `DATABASE_POOL_SIZE` (default `10`).

use std::env;
use thiserror::Error;

/// Only meant for local, non-production runs.
pub const PLACEHOLDER_DATABASE_URL: &str = "postgres://localhost/corner_store_testing";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_SIZE: u32 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub pool_size: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) if !url.is_empty() => url,
            _ => {
                tracing::warn!(
                    "DATABASE_URL is not set, using {}",
                    PLACEHOLDER_DATABASE_URL
                );
                PLACEHOLDER_DATABASE_URL.to_string()
            }
        };

        Ok(Config {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?,
            pool_size: parse_or(
                "DATABASE_POOL_SIZE",
                lookup("DATABASE_POOL_SIZE"),
                DEFAULT_POOL_SIZE,
            )?,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar(key.to_string(), raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url, PLACEHOLDER_DATABASE_URL);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.pool_size, 10);
    }

    #[test]
    fn reads_values() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://store@db/corner_store"),
            ("HOST", "0.0.0.0"),
            ("PORT", "5000"),
            ("DATABASE_POOL_SIZE", "4"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "postgres://store@db/corner_store");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.pool_size, 4);
    }

    #[test]
    fn rejects_bad_port() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid environment variable PORT: eighty"
        );
    }
}
