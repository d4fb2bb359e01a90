//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::MonitorConfig;

#[derive(Debug, Parser)]
#[command(name = "uptime-monitor", version)]
#[command(about = "Probe HTTP endpoints and report availability per domain", long_about = None)]
pub struct Cli {
    /// YAML file listing the endpoints to probe
    #[arg(value_name = "ENDPOINTS")]
    pub endpoints: PathBuf,

    /// TOML settings file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seconds between cycle starts
    #[arg(long)]
    pub interval_secs: Option<u64>,

    /// Per-probe timeout in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Maximum concurrent probes per cycle
    #[arg(long)]
    pub max_in_flight: Option<usize>,

    /// Append timeout diagnostics to this file
    #[arg(long, value_name = "FILE")]
    pub timeout_log: Option<PathBuf>,

    /// Console log level when RUST_LOG is unset
    #[arg(long)]
    pub log_level: Option<String>,

    /// Run a single cycle, print the report and exit
    #[arg(long)]
    pub once: bool,
}

impl Cli {
    /// Apply flag overrides on top of file (or default) settings.
    pub fn apply(&self, config: &mut MonitorConfig) {
        if let Some(secs) = self.interval_secs {
            config.monitor.interval_secs = secs;
        }
        if let Some(ms) = self.timeout_ms {
            config.monitor.probe_timeout_ms = ms;
        }
        if let Some(n) = self.max_in_flight {
            config.monitor.max_in_flight = n;
        }
        if let Some(path) = &self.timeout_log {
            config.observability.timeout_log = Some(path.clone());
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_path_required() {
        let err = Cli::try_parse_from(["uptime-monitor"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_positional_path() {
        let cli = Cli::try_parse_from(["uptime-monitor", "endpoints.yaml"]).unwrap();
        assert_eq!(cli.endpoints, PathBuf::from("endpoints.yaml"));
        assert!(cli.config.is_none());
        assert!(!cli.once);
    }

    #[test]
    fn test_version_available() {
        let err = Cli::try_parse_from(["uptime-monitor", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_overrides_applied() {
        let cli = Cli::try_parse_from([
            "uptime-monitor",
            "e.yaml",
            "--interval-secs",
            "30",
            "--timeout-ms",
            "750",
            "--max-in-flight",
            "8",
            "--timeout-log",
            "timeouts.log",
            "--log-level",
            "debug",
        ])
        .unwrap();

        let mut config = MonitorConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.monitor.interval_secs, 30);
        assert_eq!(config.monitor.probe_timeout_ms, 750);
        assert_eq!(config.monitor.max_in_flight, 8);
        assert_eq!(
            config.observability.timeout_log,
            Some(PathBuf::from("timeouts.log"))
        );
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn test_no_overrides_keeps_defaults() {
        let cli = Cli::try_parse_from(["uptime-monitor", "e.yaml", "--once"]).unwrap();
        let mut config = MonitorConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.monitor.interval_secs, 15);
        assert_eq!(config.monitor.probe_timeout_ms, 500);
        assert!(cli.once);
    }
}
