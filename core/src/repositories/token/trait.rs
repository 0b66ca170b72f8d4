//! Revocation ledger trait: the persisted set of revoked token ids.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::DomainError;

/// Repository trait for the token revocation ledger
///
/// The ledger holds one entry per revoked token id (`jti`) together with the
/// token's natural expiry. Membership is monotonic until swept: entries are
/// inserted on logout, never updated, and only deleted by the expiry sweeper.
///
/// # Concurrency
/// Implementations must make `revoke_token` idempotent under races: two
/// concurrent revocations of the same `jti` both succeed and leave exactly
/// one entry. Storage should enforce this with a uniqueness constraint and
/// treat a duplicate insert as success.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Record a token id as revoked until its natural expiry
    ///
    /// # Arguments
    /// * `jti` - The token's unique id claim
    /// * `expires_at` - The token's `exp` claim; the sweeper deletes the
    ///   entry once this has passed
    ///
    /// # Returns
    /// * `Ok(())` - Entry exists after the call (inserted now or earlier)
    /// * `Err(DomainError)` - Storage failure
    async fn revoke_token(&self, jti: &str, expires_at: DateTime<Utc>) -> Result<(), DomainError>;

    /// Check whether a token id is in the ledger
    ///
    /// Read-only; called once per verified request.
    async fn is_revoked(&self, jti: &str) -> Result<bool, DomainError>;

    /// Delete every entry whose expiry is strictly in the past
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of entries removed
    /// * `Err(DomainError)` - Storage failure
    async fn delete_expired(&self) -> Result<usize, DomainError>;
}
