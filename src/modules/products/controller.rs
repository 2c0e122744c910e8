use axum::Json;
use tracing::instrument;

use crate::modules::resource::ResourceIndex;

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "Products routes are mounted", body = ResourceIndex)
    ),
    tag = "Products"
)]
#[instrument]
pub async fn products_index() -> Json<ResourceIndex> {
    Json(ResourceIndex::available("products"))
}
