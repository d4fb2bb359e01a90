//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! endpoint file (YAML)
//!     → loader.rs (parse into EndpointRecord)
//!     → validation.rs (required fields, url, method, headers)
//!     → Vec<EndpointDefinition> (validated, immutable)
//!
//! settings file (TOML, optional)
//!     → loader.rs → validation.rs → MonitorConfig
//!     → CLI flags override individual fields
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All settings have defaults so the settings file is optional
//! - Any configuration error is fatal before the first cycle

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_endpoints, parse_endpoints, ConfigError};
pub use schema::{EndpointRecord, MonitorConfig, MonitorSettings, ObservabilityConfig};
pub use validation::ValidationError;
