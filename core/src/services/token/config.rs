//! Configuration for the token service

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Access token expiry in hours
    pub token_expiry_hours: i64,
}

impl TokenServiceConfig {
    /// Create a configuration with the given secret and the default
    /// 24 hour token lifetime
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_expiry_hours: 24,
        }
    }

    /// Override the token lifetime
    pub fn with_expiry_hours(mut self, hours: i64) -> Self {
        self.token_expiry_hours = hours;
        self
    }
}
