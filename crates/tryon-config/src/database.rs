//! Database connection settings.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string. When unset the gateway still
//!   serves traffic but never becomes ready.
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default 10)
//! - `DATABASE_CONNECT_TIMEOUT_SECS`: per-attempt timeout (default 5)
//! - `DATABASE_CONNECT_ATTEMPTS`: connect attempts before giving up (default 5)
//! - `DATABASE_BACKOFF_BASE_MS` / `DATABASE_BACKOFF_MAX_MS`: retry backoff
//!   (default 500 / 10000)

use std::time::Duration;

use crate::{ConfigError, lookup_non_empty, parse_or};

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
    pub connect_timeout: Duration,
    pub max_attempts: u32,
    pub backoff_base: Duration,
    pub backoff_max: Duration,
}

// The URL carries credentials.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("max_connections", &self.max_connections)
            .field("connect_timeout", &self.connect_timeout)
            .field("max_attempts", &self.max_attempts)
            .field("backoff_base", &self.backoff_base)
            .field("backoff_max", &self.backoff_max)
            .finish()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
            connect_timeout: Duration::from_secs(5),
            max_attempts: 5,
            backoff_base: Duration::from_millis(500),
            backoff_max: Duration::from_secs(10),
        }
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(crate::env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_attempts: u32 =
            parse_or(&lookup, "DATABASE_CONNECT_ATTEMPTS", defaults.max_attempts)?;
        if max_attempts == 0 {
            return Err(ConfigError::invalid(
                "DATABASE_CONNECT_ATTEMPTS",
                "0",
                "at least one attempt is required",
            ));
        }

        Ok(Self {
            url: lookup_non_empty(&lookup, "DATABASE_URL"),
            max_connections: parse_or(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                defaults.max_connections,
            )?,
            connect_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DATABASE_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout.as_secs(),
            )?),
            max_attempts,
            backoff_base: Duration::from_millis(parse_or(
                &lookup,
                "DATABASE_BACKOFF_BASE_MS",
                500u64,
            )?),
            backoff_max: Duration::from_millis(parse_or(
                &lookup,
                "DATABASE_BACKOFF_MAX_MS",
                10_000u64,
            )?),
        })
    }
}
