use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `OK`
    pub status: String,
    /// Server time, ISO-8601 UTC with millisecond precision
    pub timestamp: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReadinessResponse {
    /// `READY` or `NOT_READY`
    pub status: String,
    /// `connecting`, `connected` or `failed`
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
