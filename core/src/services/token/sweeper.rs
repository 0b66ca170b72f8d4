//! Background sweeping of expired revocation entries
//!
//! Revocation entries only matter while the token they name could still
//! pass signature and expiry checks. Once the token's own expiry has
//! passed, the entry is dead weight; the sweeper removes it on a fixed
//! interval so the ledger stays bounded by the number of live sessions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::errors::DomainError;
use crate::repositories::TokenRepository;

/// Configuration for the revocation sweeper
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// How often to run a sweep (in seconds)
    pub interval_seconds: u64,
    /// Whether the background task should run at all
    pub enabled: bool,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 24 * 60 * 60, // Daily
            enabled: true,
        }
    }
}

/// Periodic cleaner for the token revocation ledger
///
/// Owned by top-level composition: constructed once at process start,
/// never torn down explicitly. `run_sweep` is public so tests can drive a
/// single deterministic cycle without the timer.
pub struct TokenSweeper<R: TokenRepository + 'static> {
    repository: Arc<R>,
    config: SweeperConfig,
    sweeping: AtomicBool,
}

impl<R: TokenRepository + 'static> TokenSweeper<R> {
    /// Create a new sweeper over the given ledger
    pub fn new(repository: Arc<R>, config: SweeperConfig) -> Self {
        Self {
            repository,
            config,
            sweeping: AtomicBool::new(false),
        }
    }

    /// Run a single sweep cycle
    ///
    /// Deletes every ledger entry whose expiry is strictly in the past and
    /// reports how many were removed.
    pub async fn run_sweep(&self) -> Result<usize, DomainError> {
        let removed = self.repository.delete_expired().await?;
        info!("Removed {} expired revoked tokens", removed);
        Ok(removed)
    }

    /// Start the sweeper as a background tokio task
    ///
    /// A failed cycle is logged and the loop keeps going; nothing here may
    /// take the process down. If a sweep somehow outlives the interval, the
    /// overlapping tick is skipped rather than stacked.
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("Token revocation sweeper is disabled");
            return;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        tokio::spawn(async move {
            info!(
                "Token revocation sweeper started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                if self.sweeping.swap(true, Ordering::SeqCst) {
                    warn!("Previous ledger sweep still running, skipping this cycle");
                    continue;
                }

                if let Err(e) = self.run_sweep().await {
                    error!("Ledger sweep cycle failed: {}", e);
                }

                self.sweeping.store(false, Ordering::SeqCst);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{MockTokenRepository, TokenRepository};
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn sweep_removes_exactly_the_past_expiry_entries() {
        let repo = Arc::new(MockTokenRepository::new());
        repo.revoke_token("expired-1", Utc::now() - Duration::days(2))
            .await
            .unwrap();
        repo.revoke_token("expired-2", Utc::now() - Duration::seconds(5))
            .await
            .unwrap();
        repo.revoke_token("live-1", Utc::now() + Duration::hours(12))
            .await
            .unwrap();
        repo.revoke_token("live-2", Utc::now() + Duration::days(1))
            .await
            .unwrap();

        let sweeper = TokenSweeper::new(repo.clone(), SweeperConfig::default());
        let removed = sweeper.run_sweep().await.unwrap();

        assert_eq!(removed, 2);
        assert!(!repo.is_revoked("expired-1").await.unwrap());
        assert!(!repo.is_revoked("expired-2").await.unwrap());
        assert!(repo.is_revoked("live-1").await.unwrap());
        assert!(repo.is_revoked("live-2").await.unwrap());
    }

    #[tokio::test]
    async fn sweep_on_empty_ledger_removes_nothing() {
        let repo = Arc::new(MockTokenRepository::new());
        let sweeper = TokenSweeper::new(repo, SweeperConfig::default());
        assert_eq!(sweeper.run_sweep().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn consecutive_sweeps_are_stable() {
        let repo = Arc::new(MockTokenRepository::new());
        repo.revoke_token("expired", Utc::now() - Duration::hours(1))
            .await
            .unwrap();
        repo.revoke_token("live", Utc::now() + Duration::hours(1))
            .await
            .unwrap();

        let sweeper = TokenSweeper::new(repo.clone(), SweeperConfig::default());
        assert_eq!(sweeper.run_sweep().await.unwrap(), 1);
        assert_eq!(sweeper.run_sweep().await.unwrap(), 0);
        assert!(repo.is_revoked("live").await.unwrap());
    }
}
