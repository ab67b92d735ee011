//! Metrics collection and exposition.
//!
//! # Metrics
//! - `dataset_access_requests_total` (counter): access requests by outcome
//! - `dataset_access_checks_total` (counter): access checks by result
//! - `dataset_access_metadata_loads_total` (counter): listing reloads by outcome
//! - `dataset_access_rpc_duration_seconds` (histogram): wallet/contract call latency
//!
//! Recording is a no-op until an exporter is installed.

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Duration;

/// Install the Prometheus exporter with an HTTP scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Count an access request (`granted`, `failed`, `rejected`).
pub fn record_access_request(outcome: &'static str) {
    metrics::counter!("dataset_access_requests_total", "outcome" => outcome).increment(1);
}

/// Count an access check (`granted`, `denied`, `error`, `rejected`).
pub fn record_access_check(result: &'static str) {
    metrics::counter!("dataset_access_checks_total", "result" => result).increment(1);
}

/// Count a listing reload (`applied`, `superseded`, `failed`).
pub fn record_metadata_load(outcome: &'static str) {
    metrics::counter!("dataset_access_metadata_loads_total", "outcome" => outcome).increment(1);
}

/// Record how long a wallet or contract call took.
pub fn record_rpc_duration(method: &'static str, elapsed: Duration) {
    metrics::histogram!("dataset_access_rpc_duration_seconds", "method" => method)
        .record(elapsed.as_secs_f64());
}
