//! PostgreSQL connection pool creation

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

use crate::{
    config::DatabaseConfig,
    error::{Error, Result},
};

/// Create a PostgreSQL connection pool
///
/// Failed attempts are retried `max_retries` times with exponential backoff
/// starting at `retry_delay_secs`.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let base_delay = Duration::from_secs(config.retry_delay_secs);
    let mut attempt: u32 = 0;

    loop {
        match try_create_pool(config).await {
            Ok(pool) => {
                tracing::info!(
                    url = %sanitize_connection_url(&config.url),
                    attempts = attempt + 1,
                    "Database connection pool created: max={}, min={}",
                    config.max_connections,
                    config.min_connections
                );
                return Ok(pool);
            }
            Err(e) => {
                attempt += 1;

                if attempt > config.max_retries {
                    tracing::error!(
                        "Failed to connect to database after {} attempts: {}",
                        attempt,
                        e
                    );
                    return Err(e);
                }

                let delay = backoff_delay(base_delay, attempt);
                tracing::warn!(
                    "Database connection attempt {} failed: {}. Retrying in {:?}...",
                    attempt,
                    e,
                    delay
                );

                tokio::time::sleep(delay).await;
            }
        }
    }
}

/// Delay before retry number `attempt` (1-based)
fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    let multiplier = 2_u32.saturating_pow(attempt.saturating_sub(1));
    base.saturating_mul(multiplier)
}

async fn try_create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connection_timeout_secs))
        .connect(&config.url)
        .await
        .map_err(|e| {
            Error::Internal(format!(
                "Failed to connect to database at '{}' ({}): {}",
                sanitize_connection_url(&config.url),
                categorize_db_error(&e),
                e
            ))
        })
}

/// Mask the password in a connection URL for logging
fn sanitize_connection_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://").map(|i| i + 3) else {
        return url.to_string();
    };
    let Some(at_pos) = url[scheme_end..].find('@').map(|i| i + scheme_end) else {
        return url.to_string();
    };

    match url[scheme_end..at_pos].find(':') {
        Some(colon) => format!(
            "{}{}:***{}",
            &url[..scheme_end],
            &url[scheme_end..scheme_end + colon],
            &url[at_pos..]
        ),
        None => url.to_string(),
    }
}

fn categorize_db_error(err: &sqlx::Error) -> &'static str {
    use sqlx::Error;
    match err {
        Error::Configuration(_) => "configuration error",
        Error::Database(_) => "database error",
        Error::Io(_) => "network I/O error",
        Error::Tls(_) => "TLS error",
        Error::PoolTimedOut => "connection pool timeout",
        Error::PoolClosed => "connection pool closed",
        _ => "connection error",
    }
}
