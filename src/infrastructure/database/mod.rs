//! Database Module
//!
//! PostgreSQL connection pool and migrations.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseSettings;
use crate::infrastructure::metrics;

/// Create a PostgreSQL connection pool, connecting eagerly.
pub async fn create_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(settings.acquire_timeout())
        .connect(&settings.url)
        .await
}

/// Connect to the database, retrying a bounded number of times.
///
/// Sleeps `connect_interval_secs` between attempts and returns the last
/// error once `connect_attempts` is exhausted.
pub async fn connect_with_retry(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let attempts = settings.connect_attempts.max(1);
    let mut attempt = 1;

    loop {
        match create_pool(settings).await {
            Ok(pool) => {
                metrics::record_storage_connect("success");
                tracing::info!(attempt, "Database connection pool created");
                return Ok(pool);
            }
            Err(e) if attempt < attempts => {
                metrics::record_storage_connect("retry");
                tracing::warn!(
                    attempt,
                    attempts,
                    error = %e,
                    "Database unreachable, retrying in {}s",
                    settings.connect_interval_secs
                );
                tokio::time::sleep(settings.connect_interval()).await;
                attempt += 1;
            }
            Err(e) => {
                metrics::record_storage_connect("failure");
                tracing::error!(attempts, error = %e, "Giving up on the database");
                return Err(e);
            }
        }
    }
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
