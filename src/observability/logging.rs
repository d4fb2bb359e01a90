//! Structured logging.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Console layer on stderr; stdout carries only the availability report
//! - `RUST_LOG` wins over the configured level for the console
//! - Timeout diagnostics can additionally be appended to a file, which
//!   receives only the timeout target regardless of the console filter

use std::fs::OpenOptions;
use std::io;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::ObservabilityConfig;
use crate::probe::TIMEOUT_LOG_TARGET;

/// Error type for subscriber setup.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("cannot open timeout log: {0}")]
    TimeoutLog(#[from] io::Error),
}

/// Keeps the timeout log writer alive; drop it only at process exit.
#[must_use = "dropping the guard stops the timeout log writer"]
pub struct LoggingGuard {
    _timeout_log: Option<WorkerGuard>,
}

/// Install the global subscriber.
pub fn init_logging(config: &ObservabilityConfig) -> Result<LoggingGuard, LoggingError> {
    let console_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("uptime_monitor={}", config.log_level.trim()))?,
    };

    let console = fmt::layer()
        .with_writer(io::stderr)
        .with_filter(console_filter);

    let (timeout_layer, guard) = match &config.timeout_log {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false)
                .with_filter(Targets::new().with_target(TIMEOUT_LOG_TARGET, Level::WARN));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(timeout_layer)
        .init();

    Ok(LoggingGuard {
        _timeout_log: guard,
    })
}
