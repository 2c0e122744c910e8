use utoipa::OpenApi;

use crate::modules::health::model::{HealthResponse, ReadinessResponse};
use crate::modules::resource::ResourceIndex;
use crate::router::NotFoundResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::health_check,
        crate::modules::health::controller::readiness_check,
        crate::modules::products::controller::products_index,
        crate::modules::auth::controller::auth_index,
        crate::modules::try_on::controller::try_on_index,
        crate::modules::cart::controller::cart_index,
    ),
    components(
        schemas(
            HealthResponse,
            ReadinessResponse,
            ResourceIndex,
            NotFoundResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and readiness probes"),
        (name = "Products", description = "Product catalog"),
        (name = "Auth", description = "Sign-in and sessions"),
        (name = "Try-On", description = "Virtual try-on submissions"),
        (name = "Cart", description = "Shopping cart")
    ),
    info(
        title = "Try-On Gateway",
        version = "0.1.0",
        description = "HTTP entry point for the virtual try-on storefront.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
