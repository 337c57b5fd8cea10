//! Prometheus metrics for the API server.

use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::Instant;

/// Initialize the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> PrometheusHandle {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "tunelink_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "tunelink_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "tunelink_http_requests_in_flight";

    // Resolution metrics
    pub const RELATED_RESOLUTIONS_TOTAL: &str = "tunelink_related_resolutions_total";
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", sanitize_path(path)),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record one related-songs attempt by a source.
pub fn record_related_resolution(source: &str, success: bool) {
    let labels = [
        ("source", source.to_string()),
        ("outcome", if success { "success" } else { "failure" }.to_string()),
    ];
    counter!(names::RELATED_RESOLUTIONS_TOTAL, &labels).increment(1);
}

/// Replace video ids in paths with placeholders so label cardinality stays bounded.
fn sanitize_path(path: &str) -> String {
    static VIDEO_PATH: OnceLock<regex_lite::Regex> = OnceLock::new();
    let re = VIDEO_PATH.get_or_init(|| {
        regex_lite::Regex::new(r"^/(related|song)/[^/]+").expect("valid path pattern")
    });
    re.replace(path, "/$1/:video_id").to_string()
}

/// Metrics middleware for HTTP requests.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);

    let response = next.run(request).await;

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    let status = response.status().as_u16();
    let duration = start.elapsed().as_secs_f64();

    record_http_request(&method, &path, status, duration);

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_path() {
        assert_eq!(sanitize_path("/related/dQw4w9WgXcQ"), "/related/:video_id");
        assert_eq!(sanitize_path("/song/abc-123_x"), "/song/:video_id");
        assert_eq!(sanitize_path("/health"), "/health");
        assert_eq!(sanitize_path("/"), "/");
    }
}
