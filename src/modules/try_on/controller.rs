use axum::Json;
use tracing::instrument;

use crate::modules::resource::ResourceIndex;

#[utoipa::path(
    get,
    path = "/api/try-on",
    responses(
        (status = 200, description = "Try-On routes are mounted", body = ResourceIndex)
    ),
    tag = "Try-On"
)]
#[instrument]
pub async fn try_on_index() -> Json<ResourceIndex> {
    Json(ResourceIndex::available("try-on"))
}
