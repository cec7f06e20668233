//! Metrics collection and exposition.
//!
//! # Metrics
//! - `minnie_requests_total` (counter): completed requests by method,
//!   status, path
//! - `minnie_request_duration_seconds` (histogram): latency distribution
//! - `minnie_route_hits_total` (counter): hit tally, recorded by the
//!   counter worker
//!
//! Recording always goes through the `metrics` facade; without an
//! installed exporter it is a no-op, so the API surface stays unchanged
//! unless exposition is explicitly enabled.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one completed request.
pub fn record_request(method: &str, status: u16, path: &str, start: Instant) {
    let elapsed = start.elapsed().as_secs_f64();
    metrics::counter!(
        "minnie_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "path" => path.to_string()
    )
    .increment(1);
    metrics::histogram!("minnie_request_duration_seconds", "path" => path.to_string())
        .record(elapsed);
}
