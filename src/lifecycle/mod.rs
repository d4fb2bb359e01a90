//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Parse CLI → Load config → Load endpoints → Init logging/metrics → Run
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Monitor stops before its next cycle → Exit 0
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, before any probe is sent
//! - A cycle in progress is never abandoned halfway

pub mod shutdown;
pub mod signals;

pub use shutdown::{Shutdown, ShutdownSignal};
