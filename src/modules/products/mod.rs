//! Catalog routes. Listing and lookup handlers are owned by the catalog service
//! and mounted in place of this router by deployments that ship them.

pub mod controller;
pub mod router;

pub use router::init_products_router;
