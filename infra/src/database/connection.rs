//! MySQL connection pool management

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::info;

use pb_shared::config::DatabaseConfig;

/// Build a MySQL connection pool from configuration
///
/// Connects eagerly so a bad DATABASE_URL fails at startup rather than on
/// the first request.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .connect(&config.url)
        .await?;

    info!(
        "Database pool established (max {} connections)",
        config.max_connections
    );
    Ok(pool)
}
