//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Turn raw endpoint records into `EndpointDefinition`s
//! - Validate value ranges (interval > 0, timeout < interval)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure: records in, definitions or errors out
//! - Runs before the first cycle; nothing here is a per-cycle condition

use std::net::SocketAddr;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use tracing_subscriber::filter::LevelFilter;
use url::Url;

use crate::config::schema::{EndpointRecord, MonitorConfig};
use crate::endpoint::{Domain, EndpointDefinition};

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("endpoint list is empty")]
    NoEndpoints,

    #[error("endpoint #{index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("endpoint `{name}`: invalid url `{url}`: {reason}")]
    InvalidUrl {
        name: String,
        url: String,
        reason: String,
    },

    #[error("endpoint `{name}`: invalid method `{method}`")]
    InvalidMethod { name: String, method: String },

    #[error("endpoint `{name}`: invalid header `{header}`")]
    InvalidHeader { name: String, header: String },

    #[error("monitor.{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("monitor.probe_timeout_ms ({timeout_ms}ms) must be shorter than monitor.interval_secs ({interval_secs}s)")]
    TimeoutExceedsInterval { timeout_ms: u64, interval_secs: u64 },

    #[error("observability.metrics_address `{0}` is not a socket address")]
    MetricsAddress(String),

    #[error("observability.log_level `{0}` is not a log level (trace, debug, info, warn, error, off)")]
    LogLevel(String),
}

/// Validate raw endpoint records, producing immutable definitions.
pub fn validate_endpoints(
    records: &[EndpointRecord],
) -> Result<Vec<EndpointDefinition>, Vec<ValidationError>> {
    if records.is_empty() {
        return Err(vec![ValidationError::NoEndpoints]);
    }

    let mut errors = Vec::new();
    let mut endpoints = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        // 1-based in messages, matching how operators count entries.
        let index = index + 1;
        match validate_record(index, record) {
            Ok(endpoint) => endpoints.push(endpoint),
            Err(mut errs) => errors.append(&mut errs),
        }
    }

    if errors.is_empty() {
        Ok(endpoints)
    } else {
        Err(errors)
    }
}

fn validate_record(
    index: usize,
    record: &EndpointRecord,
) -> Result<EndpointDefinition, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let name = match record.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => Some(name.to_string()),
        _ => {
            errors.push(ValidationError::MissingField { index, field: "name" });
            None
        }
    };
    // Later messages need a label even when the name itself is missing.
    let label = name.clone().unwrap_or_else(|| format!("#{}", index));

    let target = match record.url.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => match parse_url(raw) {
            Ok(target) => Some(target),
            Err(reason) => {
                errors.push(ValidationError::InvalidUrl {
                    name: label.clone(),
                    url: raw.to_string(),
                    reason,
                });
                None
            }
        },
        _ => {
            errors.push(ValidationError::MissingField { index, field: "url" });
            None
        }
    };

    let method = match record.method.as_deref().map(str::trim) {
        None | Some("") => Some(Method::GET),
        Some(raw) => match Method::from_bytes(raw.to_ascii_uppercase().as_bytes()) {
            Ok(method) => Some(method),
            Err(_) => {
                errors.push(ValidationError::InvalidMethod {
                    name: label.clone(),
                    method: raw.to_string(),
                });
                None
            }
        },
    };

    let mut headers = HeaderMap::new();
    for (key, value) in &record.headers {
        match (
            HeaderName::from_bytes(key.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(key), Ok(value)) => {
                headers.insert(key, value);
            }
            _ => errors.push(ValidationError::InvalidHeader {
                name: label.clone(),
                header: key.clone(),
            }),
        }
    }

    match (name, target, method) {
        (Some(name), Some((url, domain)), Some(method)) if errors.is_empty() => Ok(
            EndpointDefinition::from_parts(name, url, domain, method, headers, record.body.clone()),
        ),
        _ => Err(errors),
    }
}

fn parse_url(raw: &str) -> Result<(Url, Domain), String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme `{}`", url.scheme()));
    }
    let domain = Domain::parse(raw).ok_or_else(|| "missing host".to_string())?;
    Ok((url, domain))
}

/// Validate monitor settings.
pub fn validate_config(config: &MonitorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let monitor = &config.monitor;

    if monitor.interval_secs == 0 {
        errors.push(ValidationError::Zero { field: "interval_secs" });
    }
    if monitor.probe_timeout_ms == 0 {
        errors.push(ValidationError::Zero { field: "probe_timeout_ms" });
    }
    if monitor.max_in_flight == 0 {
        errors.push(ValidationError::Zero { field: "max_in_flight" });
    }
    if monitor.interval_secs > 0 && monitor.probe_timeout() >= monitor.interval() {
        errors.push(ValidationError::TimeoutExceedsInterval {
            timeout_ms: monitor.probe_timeout_ms,
            interval_secs: monitor.interval_secs,
        });
    }

    let observability = &config.observability;
    if observability.log_level.trim().parse::<LevelFilter>().is_err() {
        errors.push(ValidationError::LogLevel(observability.log_level.clone()));
    }
    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
