//! Metrics collection and exposition.
//!
//! # Metrics
//! - `href_diff_requests_total` (counter): requests by status code
//! - `href_diff_request_duration_seconds` (histogram): handler latency
//! - `href_diff_unique_hrefs` (histogram): result sizes of successful requests

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one handled request.
pub fn record_request(status: u16, start_time: Instant) {
    metrics::counter!("href_diff_requests_total", "status" => status.to_string()).increment(1);
    metrics::histogram!("href_diff_request_duration_seconds")
        .record(start_time.elapsed().as_secs_f64());
}

/// Record the number of hrefs returned.
pub fn record_result_size(count: usize) {
    metrics::histogram!("href_diff_unique_hrefs").record(count as f64);
}
