use axum::http::HeaderValue;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

const DEFAULT_DATABASE_URL: &str = "sqlite://march_madness_prediction_with_teams.db";
const DEFAULT_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} is not in the correct format: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("ALLOWED_ORIGINS must name at least one origin")]
    NoOrigins,
}

/// Service settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: Ipv4Addr,
    pub port: u16,
    pub allowed_origins: Vec<HeaderValue>,
    pub query_timeout: Duration,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, falling back to
    /// defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let host = parse_or(&lookup, "HOST", Ipv4Addr::UNSPECIFIED)?;
        let port = parse_or(&lookup, "PORT", 5000u16)?;
        let timeout_ms = parse_or(&lookup, "QUERY_TIMEOUT_MS", 5000u64)?;
        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 5u32)?;

        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DB_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }

        let raw_origins = lookup("ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
        let allowed_origins = parse_origins(&raw_origins)?;

        Ok(Self {
            database_url,
            host,
            port,
            allowed_origins,
            query_timeout: Duration::from_millis(timeout_ms),
            max_connections,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            if origin == "*" {
                return Err(ConfigError::InvalidValue {
                    key: "ALLOWED_ORIGINS",
                    value: origin.to_string(),
                });
            }
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidValue {
                key: "ALLOWED_ORIGINS",
                value: origin.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if origins.is_empty() {
        return Err(ConfigError::NoOrigins);
    }

    Ok(origins)
}
