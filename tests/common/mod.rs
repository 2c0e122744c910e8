use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::body::Body;
use axum::http::Response;
use axum::routing::get;
use http_body_util::BodyExt;
use tryon_gateway::modules::GatewayRoutes;
use tryon_gateway::router::init_router;
use tryon_gateway::state::AppState;
use tryon_gateway::tryon_config::GatewayConfig;
use tryon_gateway::tryon_db::Database;

pub fn test_config(pairs: &[(&str, &str)]) -> GatewayConfig {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    GatewayConfig::from_lookup(|key| map.get(key).cloned()).unwrap()
}

#[allow(dead_code)]
pub fn setup_test_app(pairs: &[(&str, &str)]) -> Router {
    init_router(
        AppState::new(test_config(pairs), Database::new()),
        GatewayRoutes::default(),
        None,
    )
}

#[allow(dead_code)]
pub fn setup_test_app_with(db: Database, routes: GatewayRoutes, pairs: &[(&str, &str)]) -> Router {
    init_router(AppState::new(test_config(pairs), db), routes, None)
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// A route group answering every path with its own name and counting hits.
#[allow(dead_code)]
pub fn recording_group(name: &'static str, hits: Arc<AtomicUsize>) -> Router<AppState> {
    let root_hits = hits.clone();
    Router::new()
        .route(
            "/",
            get(move || {
                let hits = root_hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    name
                }
            }),
        )
        .route(
            "/{*rest}",
            get(move || {
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    name
                }
            }),
        )
}
