//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML, path from TRUEEYE_CONFIG)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (TE_PROVIDER, FLOW_API_URL, ...)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → handed to the analyzer and HTTP server at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no hot reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_from_env, ConfigError};
pub use schema::{AppConfig, ListenerConfig, LogFormat, ObservabilityConfig, Provider, ProviderConfig, ServiceConfig};
pub use validation::ValidationError;
