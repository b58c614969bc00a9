//! Metrics collection and exposition.
//!
//! # Metrics
//! - `trueeye_analyze_requests_total` (counter): analyses by outcome
//!   (`local`, `result_field`, `flow_outputs`, `generic`, `unparsed`,
//!   `not_configured`, or an upstream error code)
//! - `trueeye_upstream_duration_seconds` (histogram): flow call latency

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Count one finished analysis.
pub fn record_outcome(outcome: &str) {
    counter!("trueeye_analyze_requests_total", "outcome" => outcome.to_string()).increment(1);
}

/// Record the duration of one flow call started at `start`.
pub fn record_upstream_call(start: Instant) {
    histogram!("trueeye_upstream_duration_seconds").record(start.elapsed().as_secs_f64());
}
