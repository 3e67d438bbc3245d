//! Metrics collection and exposition.
//!
//! # Metrics
//! - `docs_requests_total` (counter): document requests by delivery mode and status
//! - `docs_render_failures_total` (counter): renders that failed before any byte was sent
//! - `docs_stream_pushes_total` (counter): stream pushes by outcome (delivered, dropped)
//! - `docs_external_metric_refresh_total` (counter): refresh attempts by outcome
//! - `docs_external_metric_value` (gauge): last successfully fetched value
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade; without an installed
//!   recorder every call is a no-op, which keeps tests free of setup

use std::net::SocketAddr;

use metrics::{counter, gauge};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter with its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_document_request(mode: &'static str, status: u16) {
    counter!("docs_requests_total", "mode" => mode, "status" => status.to_string()).increment(1);
}

pub fn record_render_failure(mode: &'static str) {
    counter!("docs_render_failures_total", "mode" => mode).increment(1);
}

pub fn record_stream_push(delivered: bool) {
    let outcome = if delivered { "delivered" } else { "dropped" };
    counter!("docs_stream_pushes_total", "outcome" => outcome).increment(1);
}

pub fn record_refresh(source: &str, success: bool) {
    let outcome = if success { "success" } else { "failure" };
    counter!(
        "docs_external_metric_refresh_total",
        "source" => source.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}

pub fn record_metric_value(source: &str, value: u64) {
    gauge!("docs_external_metric_value", "source" => source.to_string()).set(value as f64);
}
