use axum::Json;
use tracing::instrument;

use crate::modules::resource::ResourceIndex;

#[utoipa::path(
    get,
    path = "/api/auth",
    responses(
        (status = 200, description = "Auth routes are mounted", body = ResourceIndex)
    ),
    tag = "Auth"
)]
#[instrument]
pub async fn auth_index() -> Json<ResourceIndex> {
    Json(ResourceIndex::available("auth"))
}
