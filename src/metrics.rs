use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::{Duration, Instant};
use tracing::warn;
use tokio::sync::watch;
use tryon_db::DatabaseStatus;

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if observability is enabled via OBSERVABILITY_ENABLED env var
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true)
    })
}

/// Initialize Prometheus metrics exporter with upkeep task.
/// Returns None if observability is disabled or the recorder cannot be installed.
pub fn init_metrics() -> Option<PrometheusHandle> {
    if !is_observability_enabled() {
        return None;
    }

    let builder = match PrometheusBuilder::new().set_buckets_for_metric(
        Matcher::Full("http_request_duration_seconds".to_string()),
        &[
            0.001, 0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5, 10.0,
        ],
    ) {
        Ok(builder) => builder,
        Err(e) => {
            warn!(error = %e, "Failed to configure metric buckets");
            return None;
        }
    };

    let handle = match builder.install_recorder() {
        Ok(handle) => handle,
        Err(e) => {
            warn!(error = %e, "Failed to install Prometheus recorder");
            return None;
        }
    };

    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Some(handle)
}

/// Metrics middleware to track HTTP requests
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_observability_enabled() {
        return next.run(req).await;
    }

    let start = Instant::now();
    let method = req.method().as_str().to_owned();

    // Unmatched paths collapse into one label to keep cardinality bounded.
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    gauge!("http_requests_active").increment(1.0);

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16();
    let status_str = status.to_string();

    counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status_str).increment(1);

    histogram!("http_request_duration_seconds", "method" => method, "path" => path).record(latency);

    let status_category = match status {
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    };
    counter!("http_requests_by_status", "status_category" => status_category).increment(1);

    gauge!("http_requests_active").decrement(1.0);

    response
}

/// Router exposing `/metrics`
pub fn metrics_app<S>(handle: PrometheusHandle) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

/// Counts status transitions and sets `database_ready` to 1 only while the
/// pool is connected. Connect attempts are counted by `tryon_db` as
/// `database_connect_attempts_total`.
pub fn track_database_status(status: &DatabaseStatus) {
    if !is_observability_enabled() {
        return;
    }
    counter!("database_status_changes_total", "status" => status.label()).increment(1);
    let ready = if matches!(status, DatabaseStatus::Connected) {
        1.0
    } else {
        0.0
    };
    gauge!("database_ready").set(ready);
}

/// Mirrors every database status change into metrics until the database
/// handle is gone.
pub async fn watch_database_status(mut rx: watch::Receiver<DatabaseStatus>) {
    track_database_status(&rx.borrow_and_update().clone());

    while rx.changed().await.is_ok() {
        let status = rx.borrow_and_update().clone();
        track_database_status(&status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode};
    use metrics_exporter_prometheus::PrometheusRecorder;
    use tower::ServiceExt;

    fn rendered_value(rendered: &str, metric: &str) -> Option<f64> {
        rendered
            .lines()
            .find(|line| line.split_whitespace().next() == Some(metric))
            .and_then(|line| line.split_whitespace().last())
            .and_then(|value| value.parse().ok())
    }

    fn recorder() -> (PrometheusRecorder, PrometheusHandle) {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        (recorder, handle)
    }

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }

    #[test]
    fn test_database_ready_follows_status() {
        let (recorder, handle) = recorder();

        metrics::with_local_recorder(&recorder, || {
            track_database_status(&DatabaseStatus::Connecting)
        });
        assert_eq!(rendered_value(&handle.render(), "database_ready"), Some(0.0));

        metrics::with_local_recorder(&recorder, || {
            track_database_status(&DatabaseStatus::Connected)
        });
        let rendered = handle.render();
        assert_eq!(rendered_value(&rendered, "database_ready"), Some(1.0));
        assert!(rendered.contains("database_status_changes_total{status=\"connected\"}"));
    }

    #[test]
    fn test_watcher_records_latest_status_and_stops_with_sender() {
        let (recorder, handle) = recorder();
        let (tx, rx) = watch::channel(DatabaseStatus::Connecting);

        metrics::with_local_recorder(&recorder, || {
            runtime().block_on(async move {
                let watcher = tokio::spawn(watch_database_status(rx));
                tx.send(DatabaseStatus::Failed("refused".to_string())).unwrap();
                drop(tx);
                watcher.await.unwrap();
            })
        });

        assert_eq!(rendered_value(&handle.render(), "database_ready"), Some(0.0));
    }

    #[test]
    fn test_middleware_records_request_metrics() {
        let (recorder, handle) = recorder();
        let app = Router::new()
            .route("/health", get(|| async { "OK" }))
            .layer(axum::middleware::from_fn(metrics_middleware));

        let status = metrics::with_local_recorder(&recorder, || {
            runtime().block_on(async move {
                let request = axum::http::Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap();
                app.oneshot(request).await.unwrap().status()
            })
        });

        assert_eq!(status, StatusCode::OK);
        let rendered = handle.render();
        assert!(rendered.lines().any(|line| {
            line.starts_with("http_requests_total{")
                && line.contains("path=\"/health\"")
                && line.contains("status=\"200\"")
                && line.ends_with(" 1")
        }));
        assert!(rendered.contains("http_request_duration_seconds"));
        assert!(rendered.contains("http_requests_by_status{status_category=\"2xx\"} 1"));
        assert_eq!(rendered_value(&rendered, "http_requests_active"), Some(0.0));
    }
}
