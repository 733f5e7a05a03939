//! Metrics collection and exposition.
//!
//! # Metrics
//! - `http_requests_total` (counter): requests by method, status, route family
//! - `http_request_duration_seconds` (histogram): latency distribution
//!
//! Recording is a no-op until a recorder is installed with [`init_metrics`].

use std::net::SocketAddr;
use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::http::fallback::RouteFamily;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record the outcome of one request.
pub fn record_request(method: &str, status: u16, family: RouteFamily, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("status", status.to_string()),
        ("route_family", family.as_str().to_string()),
    ];
    metrics::counter!("http_requests_total", &labels).increment(1);
    metrics::histogram!("http_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}

/// Middleware recording every request, including fallbacks.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let family = RouteFamily::of(request.uri().path());

    let response = next.run(request).await;
    record_request(&method, response.status().as_u16(), family, start);
    response
}
