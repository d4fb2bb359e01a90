//! Uptime monitor.
//!
//! Probes a fixed list of HTTP endpoints on a fixed cadence and prints the
//! cumulative availability of every domain after each cycle.
//!
//! # Architecture Overview
//!
//! ```text
//!   endpoints.yaml ──▶ config ──▶ Vec<EndpointDefinition>
//!                                        │
//!                                        ▼
//!   ┌──────────────────────── monitor (every interval) ───────────────────────┐
//!   │                                                                         │
//!   │   Dispatch ──▶ probe ×N (concurrent, bounded) ──▶ Collect (join all)     │
//!   │                                                        │                │
//!   │                                                        ▼                │
//!   │   stdout ◀── Report ◀── Aggregate (StatsBook, cumulative per domain)    │
//!   └─────────────────────────────────────────────────────────────────────────┘
//!
//!   observability: console log (stderr), timeout log file, Prometheus metrics
//!   lifecycle:     Ctrl-C / SIGTERM stops the loop between cycles
//! ```

use std::process::ExitCode;

use clap::Parser;

use uptime_monitor::cli::Cli;
use uptime_monitor::config::{self, validation::validate_config, ConfigError, MonitorConfig};
use uptime_monitor::lifecycle::{signals, Shutdown};
use uptime_monitor::observability::{logging, metrics};
use uptime_monitor::{HttpProber, Monitor};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Configuration errors are fatal before logging or probing starts.
    let (config, endpoints) = match load(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let _logging = match logging::init_logging(&config.observability) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        endpoints = endpoints.len(),
        interval_secs = config.monitor.interval_secs,
        probe_timeout_ms = config.monitor.probe_timeout_ms,
        max_in_flight = config.monitor.max_in_flight,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics endpoint");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let prober = match HttpProber::new(&config.monitor) {
        Ok(prober) => prober,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build HTTP client");
            return ExitCode::FAILURE;
        }
    };
    let monitor = Monitor::new(endpoints, prober, &config.monitor);

    if cli.once {
        let (report, _) = monitor.run_once().await;
        report.emit();
        return ExitCode::SUCCESS;
    }

    let shutdown = Shutdown::new();
    let handle = tokio::spawn(monitor.run(shutdown.subscribe()));

    signals::wait_for_shutdown_signal().await;
    shutdown.trigger();

    match handle.await {
        Ok(stats) => {
            for (domain, s) in stats.domains() {
                tracing::info!(
                    domain = %domain,
                    total_attempts = s.total_attempts(),
                    success_attempts = s.success_attempts(),
                    availability_percent = s.availability_percent(),
                    "Final totals"
                );
            }
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Monitor task failed");
            ExitCode::FAILURE
        }
    }
}

fn load(cli: &Cli) -> Result<(MonitorConfig, Vec<uptime_monitor::EndpointDefinition>), ConfigError> {
    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => MonitorConfig::default(),
    };
    cli.apply(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    let endpoints = config::load_endpoints(&cli.endpoints)?;
    Ok((config, endpoints))
}
