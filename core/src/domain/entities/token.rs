//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT issuer
pub const JWT_ISSUER: &str = "projboard";

/// JWT audience
pub const JWT_AUDIENCE: &str = "projboard-api";

/// Claims structure for the JWT payload
///
/// Claims are stamped once at issuance and never mutated afterwards; the
/// verifier only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID, unique per issued token
    ///
    /// Revocation is keyed on this, so revoking one token never touches the
    /// subject's other sessions.
    pub jti: String,

    /// Role of the subject at issuance time
    pub role: String,
}

impl Claims {
    /// Creates new claims for an access token
    pub fn new(user_id: Uuid, role: &str, expiry_hours: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::hours(expiry_hours);

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
            role: role.to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    /// Expiry as a UTC timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// Revocation ledger entry
///
/// One entry per revoked token id. Entries are inserted on logout and only
/// ever removed by the sweeper once `expires_at` has passed; a naturally
/// expired token is unusable regardless of ledger membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokedToken {
    /// The revoked token's `jti` claim
    pub jti: String,

    /// The revoked token's natural expiry
    pub expires_at: DateTime<Utc>,

    /// Timestamp when the revocation was recorded
    pub created_at: DateTime<Utc>,
}

impl RevokedToken {
    /// Creates a ledger entry for the given token id and expiry
    pub fn new(jti: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            jti: jti.into(),
            expires_at,
            created_at: Utc::now(),
        }
    }

    /// Whether the sweeper may delete this entry
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}
