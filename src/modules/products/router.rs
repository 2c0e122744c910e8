use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::products_index;

pub fn init_products_router() -> Router<AppState> {
    Router::new().route("/", get(products_index))
}
