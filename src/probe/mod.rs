//! Probing subsystem.
//!
//! # Data Flow
//! ```text
//! EndpointDefinition
//!     → http.rs (one request, bounded wait)
//!     → outcome.rs (Success / Failure / Timeout)
//!     → monitor aggregation
//! ```
//!
//! # Design Decisions
//! - Every transport error becomes an outcome; nothing propagates
//! - The per-attempt timeout covers headers and body
//! - Only timeouts produce a mandatory diagnostic record

use std::future::Future;

use crate::endpoint::EndpointDefinition;

pub mod http;
pub mod outcome;

pub use http::HttpProber;
pub use outcome::ProbeOutcome;

/// Log target for timeout diagnostics, routed to the timeout log file.
pub const TIMEOUT_LOG_TARGET: &str = "uptime_monitor::timeouts";

/// Performs one attempt against one endpoint.
///
/// Implementations must be infallible: every error is folded into the
/// returned outcome.
pub trait Probe: Send + Sync {
    fn probe(&self, endpoint: &EndpointDefinition) -> impl Future<Output = ProbeOutcome> + Send;
}
