//! CORS policy configuration.
//!
//! Two policies are supported:
//!
//! - `static`: every response allows one fixed origin. Nothing is rejected.
//! - `allow-list` (default): requests carrying an `Origin` header are only
//!   accepted when the origin is an exact member of the allow-list. Requests
//!   without an `Origin` header (curl, server-to-server) always pass.
//!
//! # Environment Variables
//!
//! - `CORS_POLICY`: `allow-list` or `static`
//! - `CORS_ORIGIN`: extra allowed origin(s), comma separated
//! - `CORS_STATIC_ORIGIN`: origin used by the static policy

use http::HeaderValue;

use crate::{ConfigError, lookup_non_empty};

pub const PRODUCTION_ORIGIN: &str = "https://clownfish-app-pn8ie.ondigitalocean.app";
pub const LOCAL_DEV_ORIGIN: &str = "http://localhost:3000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorsPolicy {
    Static { origin: String },
    AllowList { origins: Vec<String> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OriginDecision {
    Allowed,
    Rejected,
}

impl CorsPolicy {
    /// Decides whether a request with the given `Origin` header may proceed.
    pub fn evaluate(&self, origin: Option<&str>) -> OriginDecision {
        let Some(origin) = origin else {
            return OriginDecision::Allowed;
        };

        match self {
            CorsPolicy::Static { .. } => OriginDecision::Allowed,
            CorsPolicy::AllowList { origins } if is_origin_allowed(origin, origins) => {
                OriginDecision::Allowed
            }
            CorsPolicy::AllowList { .. } => OriginDecision::Rejected,
        }
    }
}

/// Exact-match membership test against the allow-list.
pub fn is_origin_allowed(origin: &str, allowed: &[String]) -> bool {
    allowed.iter().any(|candidate| candidate == origin)
}

/// Builds the allow-list from the local dev origin, the configured extra
/// origins, and the production origin, in that order. Blank entries and
/// duplicates are dropped.
pub fn build_allowed_origins(extra: Option<&str>) -> Vec<String> {
    let configured = extra.into_iter().flat_map(|raw| raw.split(','));

    let mut origins: Vec<String> = Vec::new();
    for origin in std::iter::once(LOCAL_DEV_ORIGIN)
        .chain(configured)
        .chain(std::iter::once(PRODUCTION_ORIGIN))
    {
        let origin = origin.trim();
        if origin.is_empty() || origins.iter().any(|o| o == origin) {
            continue;
        }
        origins.push(origin.to_string());
    }
    origins
}

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub policy: CorsPolicy,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            policy: CorsPolicy::AllowList {
                origins: build_allowed_origins(None),
            },
        }
    }
}

impl CorsConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(crate::env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = lookup_non_empty(&lookup, "CORS_POLICY")
            .unwrap_or_else(|| "allow-list".to_string())
            .to_lowercase();

        let policy = match mode.as_str() {
            "allow-list" | "allowlist" | "allow_list" => CorsPolicy::AllowList {
                origins: build_allowed_origins(lookup_non_empty(&lookup, "CORS_ORIGIN").as_deref()),
            },
            "static" => {
                let origin = lookup_non_empty(&lookup, "CORS_STATIC_ORIGIN")
                    .unwrap_or_else(|| PRODUCTION_ORIGIN.to_string());
                if HeaderValue::from_str(&origin).is_err() {
                    return Err(ConfigError::invalid(
                        "CORS_STATIC_ORIGIN",
                        &origin,
                        "not a valid header value",
                    ));
                }
                CorsPolicy::Static { origin }
            }
            other => {
                return Err(ConfigError::invalid(
                    "CORS_POLICY",
                    other,
                    "expected `allow-list` or `static`",
                ));
            }
        };

        Ok(Self { policy })
    }
}
