//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::{EndpointRecord, MonitorConfig};
use crate::config::validation::{validate_config, validate_endpoints, ValidationError};
use crate::endpoint::EndpointDefinition;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse endpoint file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("cannot parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse endpoint records from YAML text (JSON is accepted as well).
pub fn parse_endpoints(content: &str) -> Result<Vec<EndpointDefinition>, ConfigError> {
    if content.trim().is_empty() {
        return Err(ConfigError::Validation(vec![ValidationError::NoEndpoints]));
    }
    // `~` and `null` are valid documents; treat them as an empty list.
    let records: Option<Vec<EndpointRecord>> = serde_yaml::from_str(content)?;
    validate_endpoints(&records.unwrap_or_default()).map_err(ConfigError::Validation)
}

/// Load and validate the endpoint list from a YAML file.
pub fn load_endpoints(path: &Path) -> Result<Vec<EndpointDefinition>, ConfigError> {
    let content = read(path)?;
    parse_endpoints(&content)
}

/// Load and validate monitor settings from a TOML file.
pub fn load_config(path: &Path) -> Result<MonitorConfig, ConfigError> {
    let content = read(path)?;
    let config: MonitorConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
