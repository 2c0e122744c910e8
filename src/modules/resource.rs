use serde::Serialize;
use utoipa::ToSchema;

/// Body returned by a route group's index endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ResourceIndex {
    /// Route group name, e.g. `products`
    pub resource: String,
    pub status: String,
}

impl ResourceIndex {
    pub fn available(resource: &str) -> Self {
        Self {
            resource: resource.to_string(),
            status: "available".to_string(),
        }
    }
}
