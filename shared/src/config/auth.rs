//! Authentication configuration

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Default access token lifetime (24 hours)
const DEFAULT_TOKEN_EXPIRY_HOURS: i64 = 24;

/// Default revocation sweep interval (daily)
const DEFAULT_SWEEP_INTERVAL_SECONDS: u64 = 24 * 60 * 60;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Process-wide JWT signing secret
    pub jwt_secret: String,

    /// Access token expiry in hours
    pub token_expiry_hours: i64,

    /// Interval between revocation ledger sweeps, in seconds
    pub sweep_interval_seconds: u64,
}

impl AuthConfig {
    /// Create from environment variables
    ///
    /// `JWT_SECRET` is required and must be non-empty; an absent or blank
    /// secret is a fatal configuration error, not something to default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = std::env::var("JWT_SECRET").map_err(|_| ConfigError::missing("JWT_SECRET"))?;
        if jwt_secret.trim().is_empty() {
            return Err(ConfigError::invalid("JWT_SECRET", "empty"));
        }

        let token_expiry_hours = std::env::var("TOKEN_EXPIRY_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_EXPIRY_HOURS);
        let sweep_interval_seconds = std::env::var("TOKEN_SWEEP_INTERVAL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SWEEP_INTERVAL_SECONDS);

        Ok(Self {
            jwt_secret,
            token_expiry_hours,
            sweep_interval_seconds,
        })
    }

    /// Create a configuration with an explicit secret and default lifetimes
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_expiry_hours: DEFAULT_TOKEN_EXPIRY_HOURS,
            sweep_interval_seconds: DEFAULT_SWEEP_INTERVAL_SECONDS,
        }
    }
}
