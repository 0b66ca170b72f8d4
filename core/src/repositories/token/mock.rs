//! In-memory implementation of the revocation ledger for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::RevokedToken;
use crate::errors::DomainError;

use super::r#trait::TokenRepository;

/// Mock revocation ledger backed by a `HashMap`
#[derive(Clone, Default)]
pub struct MockTokenRepository {
    entries: Arc<RwLock<HashMap<String, RevokedToken>>>,
}

impl MockTokenRepository {
    /// Create a new empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held (test assertions)
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the ledger is empty (test assertions)
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn revoke_token(&self, jti: &str, expires_at: DateTime<Utc>) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        // First write wins; a repeat revoke is a no-op success
        entries
            .entry(jti.to_string())
            .or_insert_with(|| RevokedToken::new(jti, expires_at));
        Ok(())
    }

    async fn is_revoked(&self, jti: &str) -> Result<bool, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries.contains_key(jti))
    }

    async fn delete_expired(&self) -> Result<usize, DomainError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        Ok(before - entries.len())
    }
}
