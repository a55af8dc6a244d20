//! Runtime configuration from environment variables.

use crate::error::ConfigError;
use regex::Regex;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

/// Which persistence gateway backs the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            _ => Err(ConfigError::InvalidValue {
                key: "STORAGE",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" | "text" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                key: "LOG_FORMAT",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    /// Schema holding the `customer` table. Plain SQL identifier only.
    pub schema: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub storage: StorageBackend,
    pub log_format: LogFormat,
    pub body_limit: usize,
    pub seed_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset or empty keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let schema = get("CUSTOMER_SCHEMA").unwrap_or_else(|| "public".into());
        validate_identifier("CUSTOMER_SCHEMA", &schema)?;

        Ok(AppConfig {
            database_url: get("DATABASE_URL").unwrap_or_else(|| "postgres://localhost/customers".into()),
            schema,
            max_connections: parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), 5)?,
            bind_addr: parse_or("BIND_ADDR", get("BIND_ADDR"), SocketAddr::from(([0, 0, 0, 0], 3000)))?,
            storage: get("STORAGE").map(|s| s.parse::<StorageBackend>()).transpose()?.unwrap_or(StorageBackend::Postgres),
            log_format: get("LOG_FORMAT").map(|s| s.parse::<LogFormat>()).transpose()?.unwrap_or(LogFormat::Compact),
            body_limit: parse_or("BODY_LIMIT_BYTES", get("BODY_LIMIT_BYTES"), 64 * 1024)?,
            seed_path: get("CUSTOMER_SEED_PATH").map(PathBuf::from),
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(v) => v.trim().parse().map_err(|_| ConfigError::InvalidValue { key, value: v }),
    }
}

fn validate_identifier(key: &'static str, value: &str) -> Result<(), ConfigError> {
    let re = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,62}$").map_err(|_| ConfigError::InvalidIdentifier {
        key,
        value: value.to_string(),
    })?;
    if !re.is_match(value) {
        return Err(ConfigError::InvalidIdentifier {
            key,
            value: value.to_string(),
        });
    }
    Ok(())
}
