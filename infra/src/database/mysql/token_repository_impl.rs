//! MySQL implementation of the TokenRepository trait.
//!
//! The revocation ledger is a single table keyed by `jti`. The primary key
//! makes concurrent revocations of the same token race-safe: the loser of
//! the race hits a duplicate-key error, which this implementation treats as
//! success because the entry it wanted is already there.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use pb_core::errors::DomainError;
use pb_core::repositories::TokenRepository;

/// MySQL implementation of TokenRepository
pub struct MySqlTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    /// Create a new MySQL token repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn revoke_token(&self, jti: &str, expires_at: DateTime<Utc>) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO revoked_tokens (jti, expires_at, created_at)
            VALUES (?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(jti)
            .bind(expires_at)
            .bind(Utc::now())
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(()),
            // Already revoked by a concurrent request; the ledger state is
            // what we wanted
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(()),
            Err(e) => Err(DomainError::database(format!(
                "Failed to revoke token: {}",
                e
            ))),
        }
    }

    async fn is_revoked(&self, jti: &str) -> Result<bool, DomainError> {
        let query = "SELECT EXISTS(SELECT 1 FROM revoked_tokens WHERE jti = ?) AS revoked";

        let row = sqlx::query(query)
            .bind(jti)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to check revocation: {}", e)))?;

        let revoked: i8 = row
            .try_get("revoked")
            .map_err(|e| DomainError::database(format!("Failed to read revocation flag: {}", e)))?;

        Ok(revoked == 1)
    }

    async fn delete_expired(&self) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM revoked_tokens WHERE expires_at < ?")
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to delete expired entries: {}", e))
            })?;

        Ok(result.rows_affected() as usize)
    }
}
