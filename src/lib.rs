//! Continuous HTTP endpoint availability monitor.

pub mod cli;
pub mod config;
pub mod endpoint;
pub mod lifecycle;
pub mod monitor;
pub mod observability;
pub mod probe;

pub use config::MonitorConfig;
pub use endpoint::{Domain, EndpointDefinition};
pub use lifecycle::Shutdown;
pub use monitor::Monitor;
pub use probe::{HttpProber, Probe, ProbeOutcome};
