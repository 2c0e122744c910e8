use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::cart_index;

pub fn init_cart_router() -> Router<AppState> {
    Router::new().route("/", get(cart_index))
}
