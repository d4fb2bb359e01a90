//! Metrics collection and exposition.
//!
//! # Metrics
//! - `uptime_probe_total` (counter): attempts by domain, outcome
//! - `uptime_domain_availability_percent` (gauge): cumulative availability
//! - `uptime_cycle_duration_seconds` (histogram): dispatch to report latency
//! - `uptime_cycle_overruns_total` (counter): cycles longer than the interval
//!
//! Recording is a no-op until a recorder is installed, so tests and
//! `metrics_enabled = false` runs pay nothing.

use std::net::SocketAddr;
use std::time::Duration;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::endpoint::Domain;
use crate::probe::ProbeOutcome;

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_probe(domain: &Domain, outcome: ProbeOutcome) {
    metrics::counter!(
        "uptime_probe_total",
        "domain" => domain.to_string(),
        "outcome" => outcome.as_str()
    )
    .increment(1);
}

pub fn record_availability(domain: &Domain, percent: u8) {
    metrics::gauge!("uptime_domain_availability_percent", "domain" => domain.to_string())
        .set(f64::from(percent));
}

pub fn record_cycle(elapsed: Duration, overrun: bool) {
    metrics::histogram!("uptime_cycle_duration_seconds").record(elapsed.as_secs_f64());
    if overrun {
        metrics::counter!("uptime_cycle_overruns_total").increment(1);
    }
}
