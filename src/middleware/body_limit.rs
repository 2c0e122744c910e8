use anyhow::anyhow;
use axum::{
    body::Body,
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use http_body_util::Limited;
use tryon_config::BodyLimitConfig;
use tryon_core::AppError;

/// Caps the request body by content type.
///
/// A declared `Content-Length` over the ceiling is refused here, before any
/// handler runs. Bodies without a length are wrapped so that reading past the
/// ceiling fails inside the extractor with 413.
pub async fn enforce_body_limits(
    State(limits): State<BodyLimitConfig>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    let limit = limits.limit_for(content_type);

    let declared_length = req
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    if let Some(length) = declared_length.filter(|&length| length > limit as u64) {
        return Err(AppError::payload_too_large(anyhow!(
            "Request body of {length} bytes exceeds the {limit} byte limit"
        )));
    }

    let (parts, body) = req.into_parts();
    let req = Request::from_parts(parts, Body::new(Limited::new(body, limit)));

    Ok(next.run(req).await)
}
