use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::auth_index;

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/", get(auth_index))
}
