//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Deserializer, Serialize};

/// Root configuration for the analysis service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address, inbound limits).
    pub listener: ListenerConfig,

    /// Analysis provider and flow endpoint.
    pub provider: ProviderConfig,

    /// Service identity and static assets.
    pub service: ServiceConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,

    /// Inbound request timeout in seconds. Must cover the flow timeout.
    pub request_timeout_secs: u64,

    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
            request_timeout_secs: 330,
            max_body_bytes: 64 * 1024,
        }
    }
}

/// Which backend answers analysis requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Canned answers, no network.
    Local,
    /// Forward to the flow service.
    #[default]
    Remote,
}

impl Provider {
    /// `local` (any case) selects local mode; every other value means remote.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("local") {
            Provider::Local
        } else {
            Provider::Remote
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Local => "local",
            Provider::Remote => "remote",
        }
    }
}

impl<'de> Deserialize<'de> for Provider {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Provider::parse(&raw))
    }
}

/// Analysis provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Local stub or remote flow.
    pub mode: Provider,

    /// Flow run endpoint. Required for remote mode.
    pub flow_api_url: Option<String>,

    /// Flow request timeout in seconds.
    pub timeout_secs: u64,

    /// User-Agent sent to the flow service.
    pub user_agent: String,
}

impl ProviderConfig {
    /// True when a non-empty flow endpoint is set.
    pub fn flow_configured(&self) -> bool {
        self.flow_api_url
            .as_deref()
            .map_or(false, |url| !url.trim().is_empty())
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            mode: Provider::Remote,
            flow_api_url: None,
            timeout_secs: 300,
            user_agent: concat!("TrueEye/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Service identity and static asset location.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Name reported by the health endpoint.
    pub name: String,

    /// Directory holding `index.html` and other frontend assets.
    pub static_dir: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "TrueEye Reports".to_string(),
            static_dir: "static".to_string(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Human-readable or JSON log lines.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
