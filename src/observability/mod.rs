//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Prober and monitor produce:
//!     → logging.rs (structured log events, timeout diagnostics)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stderr (console log), timeout log file
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```

pub mod logging;
pub mod metrics;
