//! Cross-cutting request middleware.
//!
//! - [`cors`]: CORS headers and origin enforcement
//! - [`body_limit`]: per-content-type request body ceilings
//! - [`trailing_slash`]: `/health/` routes like `/health`

pub mod body_limit;
pub mod cors;
pub mod trailing_slash;

pub use body_limit::enforce_body_limits;
pub use cors::{cors_layer, enforce_origin};
pub use trailing_slash::trim_trailing_slash;
