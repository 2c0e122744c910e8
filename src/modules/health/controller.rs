use axum::{Json, extract::State, http::StatusCode};
use chrono::{SecondsFormat, Utc};
use tryon_db::DatabaseStatus;

use crate::modules::health::model::{HealthResponse, ReadinessResponse};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Process is alive", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Database connected", body = ReadinessResponse),
        (status = 503, description = "Database connecting or failed", body = ReadinessResponse)
    ),
    tag = "Health"
)]
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let status = state.db.status();
    let database = status.label().to_string();

    match status {
        DatabaseStatus::Connected => (
            StatusCode::OK,
            Json(ReadinessResponse {
                status: "READY".to_string(),
                database,
                reason: None,
            }),
        ),
        DatabaseStatus::Connecting => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadinessResponse {
                status: "NOT_READY".to_string(),
                database,
                reason: None,
            }),
        ),
        DatabaseStatus::Failed(reason) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadinessResponse {
                status: "NOT_READY".to_string(),
                database,
                reason: Some(reason),
            }),
        ),
    }
}
