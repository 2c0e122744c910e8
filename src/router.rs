use std::sync::Arc;

use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::{metrics_app, metrics_middleware};
use crate::middleware::{cors_layer, enforce_body_limits, enforce_origin, trim_trailing_slash};
use crate::modules::GatewayRoutes;
use crate::modules::health::init_health_router;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct NotFoundResponse {
    pub message: String,
}

/// Answers every request no route matched, including unknown paths under a
/// mounted group and known paths hit with the wrong method.
pub async fn not_found() -> (StatusCode, Json<NotFoundResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            message: "Route not found".to_string(),
        }),
    )
}

pub fn init_router(
    state: AppState,
    routes: GatewayRoutes,
    metrics: Option<PrometheusHandle>,
) -> Router {
    let config = state.config.clone();
    let cors_policy = Arc::new(config.cors.policy.clone());

    let mut router = Router::new()
        .merge(init_health_router())
        .nest(
            "/api",
            Router::new()
                .nest("/products", routes.products)
                .nest("/auth", routes.auth)
                .nest("/try-on", routes.try_on)
                .nest("/cart", routes.cart),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()));

    if let Some(handle) = metrics {
        router = router.merge(metrics_app(handle));
    }

    // Must run after every route is registered; it only touches existing ones.
    let router = router
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn_with_state(
            config.body_limits.clone(),
            enforce_body_limits,
        ))
        .layer(DefaultBodyLimit::max(config.body_limits.max_limit()))
        .layer(cors_layer(&config.cors.policy))
        .layer(middleware::from_fn_with_state(cors_policy, enforce_origin))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware));

    // Path rewriting has to happen before routing, so it wraps the whole
    // router as a fallback service instead of sitting among its layers.
    Router::new()
        .fallback_service(router)
        .layer(middleware::map_request(trim_trailing_slash))
}
