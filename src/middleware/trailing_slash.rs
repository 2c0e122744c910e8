use axum::{extract::Request, http::Uri};

/// Swagger UI redirects its bare path to the slashed one, so trimming there
/// would loop.
const SWAGGER_UI_PREFIX: &str = "/swagger-ui";

/// Drops trailing slashes from the request path so `/api/cart/` is served by
/// the `/api/cart` route. The root path and Swagger UI are left alone.
pub async fn trim_trailing_slash(mut req: Request) -> Request {
    if let Some(uri) = trimmed_uri(req.uri()) {
        *req.uri_mut() = uri;
    }
    req
}

fn trimmed_uri(uri: &Uri) -> Option<Uri> {
    let path = uri.path();
    if path.len() <= 1 || !path.ends_with('/') || path.starts_with(SWAGGER_UI_PREFIX) {
        return None;
    }

    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    let path_and_query = match uri.query() {
        Some(query) => format!("{trimmed}?{query}"),
        None => trimmed.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse().ok()?);
    Uri::from_parts(parts).ok()
}
