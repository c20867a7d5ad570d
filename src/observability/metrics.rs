//! Metrics collection and exposition.
//!
//! # Metrics
//! - `combiner_requests_total` (counter): requests by extension, status
//! - `combiner_request_duration_seconds` (histogram): latency by extension
//! - `combiner_cache_hits_total` / `combiner_cache_misses_total` (counters)
//! - `combiner_cache_entries` (gauge): current cache entry count
//! - `combiner_resources_merged_total` (counter): resolved resources fetched
//!
//! # Design Decisions
//! - Free functions so call sites stay one-liners
//! - Labels limited to extension and status to keep cardinality low

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint. Failure to start the exporter
/// is logged and otherwise ignored; the service runs without metrics.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Prometheus exporter started"),
        Err(e) => tracing::error!(error = %e, "Failed to start Prometheus exporter"),
    }
}

/// Record one served request.
pub fn record_request(extension: &'static str, status: u16, start: Instant) {
    counter!(
        "combiner_requests_total",
        "extension" => extension,
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("combiner_request_duration_seconds", "extension" => extension)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_cache_hit() {
    counter!("combiner_cache_hits_total").increment(1);
}

pub fn record_cache_miss() {
    counter!("combiner_cache_misses_total").increment(1);
}

pub fn record_cache_size(entries: usize) {
    gauge!("combiner_cache_entries").set(entries as f64);
}

pub fn record_resources_merged(count: usize) {
    counter!("combiner_resources_merged_total").increment(count as u64);
}
