//! Configuration schema definitions.
//!
//! Two shapes live here: the monitor settings (TOML) and the raw endpoint
//! records (YAML). All types derive Serde traits for deserialization.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the monitor.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MonitorConfig {
    /// Cycle and probe settings.
    pub monitor: MonitorSettings,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

/// Cycle cadence and per-probe limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MonitorSettings {
    /// Cycle period in seconds.
    pub interval_secs: u64,

    /// Per-attempt bound in milliseconds (headers and body).
    pub probe_timeout_ms: u64,

    /// Maximum probes in flight within one cycle.
    pub max_in_flight: usize,

    /// User-Agent sent with every probe.
    pub user_agent: String,
}

impl MonitorSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            interval_secs: 15,
            probe_timeout_ms: 500,
            max_in_flight: 256,
            user_agent: concat!("uptime-monitor/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Console log level when `RUST_LOG` is unset.
    pub log_level: String,

    /// Append-only file receiving timeout diagnostics.
    pub timeout_log: Option<PathBuf>,

    /// Enable the Prometheus scrape endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            timeout_log: None,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// One entry of the endpoint file, as written by the operator.
///
/// Every field is optional at this stage so validation can report all
/// missing fields at once instead of failing on the first.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EndpointRecord {
    pub name: Option<String>,

    pub url: Option<String>,

    /// HTTP verb (default: GET).
    #[serde(default)]
    pub method: Option<String>,

    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Sent as a JSON request body when present.
    #[serde(default)]
    pub body: Option<serde_json::Value>,
}
