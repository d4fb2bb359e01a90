//! Monitoring subsystem.
//!
//! # Data Flow
//! ```text
//! Each cycle (runner.rs):
//!     Dispatch → one probe per endpoint, concurrently
//!     Collect  → wait for every outcome
//!     Aggregate → stats.rs (per-domain counters, cumulative)
//!     Report   → report.rs (one availability line per domain)
//!     Sleep    → until the next cycle boundary
//! ```
//!
//! # Design Decisions
//! - Counters are cumulative since start, never windowed or reset
//! - Aggregation runs in one sequential phase, so no locking is needed
//! - Cycles never overlap; an overrun delays the next cycle instead

pub mod report;
pub mod runner;
pub mod stats;

pub use report::{CycleReport, DomainAvailability};
pub use runner::Monitor;
pub use stats::{DomainStats, StatsBook};
