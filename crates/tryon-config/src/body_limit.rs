//! Request body ceilings.
//!
//! URL-encoded submissions may carry inline image data for try-on requests,
//! so they get a much larger ceiling than JSON bodies.
//!
//! # Environment Variables
//!
//! - `JSON_BODY_LIMIT`: bytes, default 100 KiB
//! - `FORM_BODY_LIMIT`: bytes, default 50 MiB

use crate::{ConfigError, parse_or};

pub const DEFAULT_JSON_LIMIT: usize = 100 * 1024;
pub const DEFAULT_FORM_LIMIT: usize = 50 * 1024 * 1024;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
const JSON: &str = "application/json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BodyLimitConfig {
    pub json_limit_bytes: usize,
    pub form_limit_bytes: usize,
}

impl Default for BodyLimitConfig {
    fn default() -> Self {
        Self {
            json_limit_bytes: DEFAULT_JSON_LIMIT,
            form_limit_bytes: DEFAULT_FORM_LIMIT,
        }
    }
}

impl BodyLimitConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(crate::env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            json_limit_bytes: parse_or(&lookup, "JSON_BODY_LIMIT", DEFAULT_JSON_LIMIT)?,
            form_limit_bytes: parse_or(&lookup, "FORM_BODY_LIMIT", DEFAULT_FORM_LIMIT)?,
        })
    }

    /// The largest body any request may carry.
    pub fn max_limit(&self) -> usize {
        self.json_limit_bytes.max(self.form_limit_bytes)
    }

    /// Picks the ceiling for a request from its `Content-Type`.
    pub fn limit_for(&self, content_type: Option<&str>) -> usize {
        let essence = content_type
            .and_then(|ct| ct.split(';').next())
            .map(|ct| ct.trim().to_ascii_lowercase());

        match essence.as_deref() {
            Some(FORM_URLENCODED) => self.form_limit_bytes,
            Some(ct) if ct == JSON || ct.ends_with("+json") => self.json_limit_bytes,
            _ => self.max_limit(),
        }
    }
}
