//! Route groups mounted by the gateway.
//!
//! Each group follows the same layout:
//!
//! - `mod.rs`: module exports
//! - `controller.rs`: HTTP handlers
//! - `router.rs`: Axum router for the group
//!
//! The gateway itself does no authorization or validation for the API groups;
//! that belongs to whichever handlers are mounted. [`GatewayRoutes`] is the
//! seam for swapping them.

pub mod auth;
pub mod cart;
pub mod health;
pub mod products;
pub mod resource;
pub mod try_on;

use axum::Router;

use crate::state::AppState;

/// The four API route groups, mounted under `/api` in this order:
/// products, auth, try-on, cart.
pub struct GatewayRoutes {
    pub products: Router<AppState>,
    pub auth: Router<AppState>,
    pub try_on: Router<AppState>,
    pub cart: Router<AppState>,
}

impl Default for GatewayRoutes {
    fn default() -> Self {
        Self {
            products: products::init_products_router(),
            auth: auth::init_auth_router(),
            try_on: try_on::init_try_on_router(),
            cart: cart::init_cart_router(),
        }
    }
}
