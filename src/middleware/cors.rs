//! CORS handling.
//!
//! Two pieces work together:
//!
//! - [`cors_layer`] builds the tower-http layer that answers preflights and
//!   adds `Access-Control-*` headers.
//! - [`enforce_origin`] refuses requests whose `Origin` the policy rejects,
//!   turning them into an [`AppError`] instead of silently omitting headers.
//!   It sits outside the CORS layer so rejected preflights are refused too.

use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    extract::{Request, State},
    http::{HeaderValue, Method, header},
    middleware::Next,
    response::Response,
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tracing::warn;
use tryon_config::{CorsPolicy, OriginDecision, is_origin_allowed};
use tryon_core::AppError;

pub fn cors_layer(policy: &CorsPolicy) -> CorsLayer {
    match policy {
        CorsPolicy::Static { origin } => {
            let layer = CorsLayer::new()
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .allow_credentials(true);

            match HeaderValue::from_str(origin) {
                Ok(origin) => layer.allow_origin(origin),
                Err(_) => {
                    warn!(origin = %origin, "Static CORS origin is not a valid header value");
                    layer
                }
            }
        }
        CorsPolicy::AllowList { origins } => {
            let allowed = origins.clone();

            CorsLayer::new()
                .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _req| {
                    origin
                        .to_str()
                        .map(|origin| is_origin_allowed(origin, &allowed))
                        .unwrap_or(false)
                }))
                .allow_methods([
                    Method::GET,
                    Method::HEAD,
                    Method::PUT,
                    Method::PATCH,
                    Method::POST,
                    Method::DELETE,
                ])
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true)
        }
    }
}

pub async fn enforce_origin(
    State(policy): State<Arc<CorsPolicy>>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(origin) = req.headers().get(header::ORIGIN) {
        // Non-UTF-8 origins can never match the allow-list.
        let decision = policy.evaluate(Some(origin.to_str().unwrap_or_default()));

        if decision == OriginDecision::Rejected {
            return Err(AppError::forbidden(anyhow!(
                "Origin {} is not allowed by CORS",
                String::from_utf8_lossy(origin.as_bytes())
            )));
        }
    }

    Ok(next.run(req).await)
}
