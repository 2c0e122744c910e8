mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, recording_group, setup_test_app, setup_test_app_with, test_config};
use http_body_util::BodyExt;
use metrics_exporter_prometheus::PrometheusBuilder;
use tower::ServiceExt;
use tryon_gateway::modules::GatewayRoutes;
use tryon_gateway::router::init_router;
use tryon_gateway::state::AppState;
use tryon_gateway::tryon_db::Database;

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_unknown_path_returns_route_not_found() {
    let app = setup_test_app(&[]);

    let response = app.oneshot(request(Method::GET, "/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], br#"{"message":"Route not found"}"#);
}

#[tokio::test]
async fn test_unknown_path_under_a_group_uses_same_fallback() {
    let app = setup_test_app(&[]);

    let response = app
        .oneshot(request(Method::POST, "/api/products/42/reviews"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Route not found");
}

#[tokio::test]
async fn test_all_groups_are_mounted() {
    for (uri, resource) in [
        ("/api/products", "products"),
        ("/api/auth", "auth"),
        ("/api/try-on", "try-on"),
        ("/api/cart", "cart"),
    ] {
        let app = setup_test_app(&[]);
        let response = app.oneshot(request(Method::GET, uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");

        let body = body_json(response).await;
        assert_eq!(body["resource"], resource);
        assert_eq!(body["status"], "available");
    }
}

#[tokio::test]
async fn test_prefix_dispatches_only_to_its_group() {
    let products = Arc::new(AtomicUsize::new(0));
    let auth = Arc::new(AtomicUsize::new(0));
    let try_on = Arc::new(AtomicUsize::new(0));
    let cart = Arc::new(AtomicUsize::new(0));

    let routes = GatewayRoutes {
        products: recording_group("products", products.clone()),
        auth: recording_group("auth", auth.clone()),
        try_on: recording_group("try-on", try_on.clone()),
        cart: recording_group("cart", cart.clone()),
    };
    let app = setup_test_app_with(Database::new(), routes, &[]);

    let response = app
        .clone()
        .oneshot(request(Method::GET, "/api/cart/x"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"cart");

    assert_eq!(cart.load(Ordering::SeqCst), 1);
    assert_eq!(products.load(Ordering::SeqCst), 0);
    assert_eq!(auth.load(Ordering::SeqCst), 0);
    assert_eq!(try_on.load(Ordering::SeqCst), 0);

    let response = app
        .oneshot(request(Method::GET, "/api/try-on/sessions/1"))
        .await
        .unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"try-on");
    assert_eq!(try_on.load(Ordering::SeqCst), 1);
    assert_eq!(cart.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_group_prefix_must_match_whole_segment() {
    let products = Arc::new(AtomicUsize::new(0));
    let routes = GatewayRoutes {
        products: recording_group("products", products.clone()),
        ..GatewayRoutes::default()
    };
    let app = setup_test_app_with(Database::new(), routes, &[]);

    let response = app
        .oneshot(request(Method::GET, "/api/productsx"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(products.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_openapi_document_lists_probes() {
    let app = setup_test_app(&[]);

    let response = app
        .oneshot(request(Method::GET, "/api-docs/openapi.json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["paths"].get("/health").is_some());
    assert!(body["paths"].get("/ready").is_some());
    assert!(body["paths"].get("/api/try-on").is_some());
}

#[tokio::test]
async fn test_wrong_method_on_known_path_returns_route_not_found() {
    for (method, uri) in [
        (Method::POST, "/health"),
        (Method::DELETE, "/api/cart"),
        (Method::PUT, "/ready"),
    ] {
        let app = setup_test_app(&[]);
        let response = app.oneshot(request(method.clone(), uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {uri}");

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], br#"{"message":"Route not found"}"#, "{method} {uri}");
    }
}

#[tokio::test]
async fn test_trailing_slash_routes_like_bare_path() {
    let app = setup_test_app(&[]);
    let response = app.oneshot(request(Method::GET, "/health/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "OK");

    let app = setup_test_app(&[]);
    let response = app
        .oneshot(request(Method::GET, "/api/cart/"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["resource"], "cart");
}

#[tokio::test]
async fn test_swagger_ui_index_keeps_its_trailing_slash() {
    let app = setup_test_app(&[]);

    let response = app
        .oneshot(request(Method::GET, "/swagger-ui/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_metrics_route_is_mounted_only_with_a_handle() {
    let handle = PrometheusBuilder::new().build_recorder().handle();
    let with_metrics = init_router(
        AppState::new(test_config(&[]), Database::new()),
        GatewayRoutes::default(),
        Some(handle),
    );
    let response = with_metrics
        .oneshot(request(Method::GET, "/metrics"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let without_metrics = setup_test_app(&[]);
    let response = without_metrics
        .oneshot(request(Method::GET, "/metrics"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_metrics_route_goes_through_origin_enforcement() {
    let handle = PrometheusBuilder::new().build_recorder().handle();
    let app = init_router(
        AppState::new(test_config(&[]), Database::new()),
        GatewayRoutes::default(),
        Some(handle),
    );

    let request = Request::builder()
        .uri("/metrics")
        .header("origin", "https://evil.example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
