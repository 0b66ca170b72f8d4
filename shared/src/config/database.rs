//! Database configuration module

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Database configuration for the MySQL connection pool
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout: u64,

    /// Idle connection timeout in seconds
    pub idle_timeout: u64,
}

impl DatabaseConfig {
    /// Create from environment variables
    ///
    /// `DATABASE_URL` is required; pool tuning knobs fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var("DATABASE_URL").map_err(|_| ConfigError::missing("DATABASE_URL"))?;
        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);
        let connect_timeout = std::env::var("DATABASE_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            url,
            max_connections,
            connect_timeout,
            idle_timeout: 600,
        })
    }

    /// Create a new database configuration with a URL and defaults
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            connect_timeout: 30,
            idle_timeout: 600,
        }
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }
}
