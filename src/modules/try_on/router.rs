use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::try_on_index;

pub fn init_try_on_router() -> Router<AppState> {
    Router::new().route("/", get(try_on_index))
}
