//! Configuration types for the ProjBoard server
//!
//! All configuration is sourced from environment variables at startup.
//! Missing values that have no safe default (the JWT signing secret, the
//! database URL) are fatal: `AppConfig::from_env` returns an error and the
//! process must not continue serving traffic.

mod auth;
mod database;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;

use std::fmt;

/// Error raised when required configuration is absent or malformed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// Name of the offending environment variable
    pub variable: String,
    /// What went wrong
    pub reason: String,
}

impl ConfigError {
    pub fn missing(variable: &str) -> Self {
        Self {
            variable: variable.to_string(),
            reason: "not set".to_string(),
        }
    }

    pub fn invalid(variable: &str, reason: impl Into<String>) -> Self {
        Self {
            variable: variable.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "configuration error: {} is {}", self.variable, self.reason)
    }
}

impl std::error::Error for ConfigError {}

/// Aggregated application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load the complete configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env()?,
            auth: AuthConfig::from_env()?,
        })
    }
}
