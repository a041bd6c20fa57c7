//! # Configuration
//!
//! All configuration is sourced from the environment at startup. Missing
//! variables fall back to local-development defaults; a variable that is
//! present but unparseable is a fatal startup error.

use std::env;

use thiserror::Error;

/// Configuration errors, fatal at startup
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// An environment variable held a value that does not parse.
    #[error("invalid value '{value}' for {var}: expected {expected}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Full process configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub postgres: PostgresConfig,
    pub mongo: MongoConfig,
}

impl AppConfig {
    /// Reads configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            http: HttpConfig::from_env()?,
            postgres: PostgresConfig::from_env()?,
            mongo: MongoConfig::from_env()?,
        })
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Host to bind to (default: "0.0.0.0")
    pub host: String,
    /// Port to bind to (default: 3020)
    pub port: u16,
}

impl HttpConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_or("HTTP_HOST", "0.0.0.0"),
            port: port_or("HTTP_PORT", 3020)?,
        })
    }

    /// Socket address string for the listener.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3020,
        }
    }
}

/// Relational backend connection settings.
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
}

impl PostgresConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_or("POSTGRES_HOST", "localhost"),
            port: port_or("POSTGRES_PORT", 5432)?,
            user: env_or("POSTGRES_USER", "postgres"),
            password: env_or("POSTGRES_PASSWORD", "postgres"),
            database: env_or("POSTGRES_DB", "postgres"),
            max_connections: 5,
        })
    }
}

/// Document backend connection settings.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
}

impl MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_or("MONGO_HOST", "localhost"),
            port: port_or("MONGO_PORT", 27017)?,
            database: env_or("MONGO_DB", "resources"),
        })
    }

    /// Connection string for the driver.
    pub fn url(&self) -> String {
        format!("mongodb://{}:{}", self.host, self.port)
    }
}

fn env_or(var: &'static str, default: &str) -> String {
    env::var(var).unwrap_or_else(|_| default.to_string())
}

fn port_or(var: &'static str, default: u16) -> Result<u16, ConfigError> {
    parse_port(var, env::var(var).ok(), default)
}

fn parse_port(
    var: &'static str,
    value: Option<String>,
    default: u16,
) -> Result<u16, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
            var,
            value: raw,
            expected: "a port number",
        }),
    }
}
