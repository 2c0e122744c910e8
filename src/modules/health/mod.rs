//! Liveness and readiness probes.
//!
//! `/health` only says the process is up. `/ready` additionally reports
//! whether the database connection has been established.

pub mod controller;
pub mod model;
pub mod router;

pub use model::*;
pub use router::init_health_router;
