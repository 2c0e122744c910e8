use std::future::Future;
use std::time::Duration;

use metrics::counter;
use sqlx::postgres::PgPoolOptions;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use tryon_config::DatabaseConfig;

use crate::{Database, calculate_backoff};

/// Runs `op` up to `max_attempts` times, sleeping with exponential backoff
/// between failures. Returns the last error when the budget runs out.
pub async fn retry_with_backoff<T, E, F, Fut>(
    max_attempts: u32,
    base: Duration,
    max: Duration,
    mut op: F,
) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(e) => {
                let delay = calculate_backoff(attempt, base, max);
                warn!(
                    attempt,
                    max_attempts,
                    retry_in_ms = %delay.as_millis(),
                    error = %e,
                    "Database connection attempt failed"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

/// Connects the pool and publishes the outcome on `db`. Never panics; a
/// missing URL or an exhausted retry budget leaves `db` in the failed state.
pub async fn connect_with_retry(config: &DatabaseConfig, db: &Database) {
    let Some(url) = config.url.as_deref() else {
        warn!("DATABASE_URL is not set; the gateway will not report ready");
        db.mark_failed("DATABASE_URL is not set");
        return;
    };

    let result = retry_with_backoff(
        config.max_attempts,
        config.backoff_base,
        config.backoff_max,
        |attempt| {
            info!(attempt, "Connecting to database");
            counter!("database_connect_attempts_total").increment(1);
            PgPoolOptions::new()
                .max_connections(config.max_connections)
                .acquire_timeout(config.connect_timeout)
                .connect(url)
        },
    )
    .await;

    match result {
        Ok(pool) => {
            info!("Database connection established");
            db.mark_connected(pool);
        }
        Err(e) => {
            error!(
                attempts = config.max_attempts,
                error = %e,
                "Giving up on database connection"
            );
            db.mark_failed(e.to_string());
        }
    }
}

/// Runs [`connect_with_retry`] on a background task.
pub fn spawn_connect(config: DatabaseConfig, db: Database) -> JoinHandle<()> {
    tokio::spawn(async move { connect_with_retry(&config, &db).await })
}
