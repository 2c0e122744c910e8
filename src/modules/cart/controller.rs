use axum::Json;
use tracing::instrument;

use crate::modules::resource::ResourceIndex;

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart routes are mounted", body = ResourceIndex)
    ),
    tag = "Cart"
)]
#[instrument]
pub async fn cart_index() -> Json<ResourceIndex> {
    Json(ResourceIndex::available("cart"))
}
