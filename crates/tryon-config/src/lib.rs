//! # Try-On Config
//!
//! Configuration types for the try-on gateway.
//!
//! Every structure is read once at startup from environment variables:
//!
//! - [`server`]: bind address and port
//! - [`cors`]: CORS policy and the origin predicate
//! - [`body_limit`]: request body ceilings per content type
//! - [`database`]: connection pool and connect retry budget
//!
//! Each config exposes `from_env()` plus `from_lookup()`, which takes any
//! `Fn(&str) -> Option<String>` so values can come from a map in tests.
//!
//! # Example
//!
//! ```ignore
//! use tryon_config::GatewayConfig;
//!
//! let config = GatewayConfig::from_env()?;
//! println!("binding {}", config.server.socket_addr());
//! ```

pub mod body_limit;
pub mod cors;
pub mod database;
pub mod error;
pub mod server;

pub use body_limit::BodyLimitConfig;
pub use cors::{CorsConfig, CorsPolicy, OriginDecision, is_origin_allowed};
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use server::ServerConfig;

/// Reads a variable from the process environment.
pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Looks up `key`, treating unset and blank values the same.
pub(crate) fn lookup_non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Looks up `key` and parses it, falling back to `default` when unset.
pub(crate) fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup_non_empty(lookup, key) {
        Some(value) => value
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid(key, &value, e)),
        None => Ok(default),
    }
}

/// Everything the gateway reads from the environment.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub body_limits: BodyLimitConfig,
    pub database: DatabaseConfig,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerConfig::from_lookup(&lookup)?,
            cors: CorsConfig::from_lookup(&lookup)?,
            body_limits: BodyLimitConfig::from_lookup(&lookup)?,
            database: DatabaseConfig::from_lookup(&lookup)?,
        })
    }
}
