//! Health reporting.
//!
//! # Design Decisions
//! - Reports static configuration only; never probes the flow service
//! - Always "healthy": a missing flow endpoint is visible through
//!   `flow_configured`, not through the status

use serde::{Deserialize, Serialize};

use crate::config::{AppConfig, Provider};

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub flow_configured: bool,
    pub service: String,
    pub provider: Provider,
}

impl HealthReport {
    /// Snapshot the health-relevant parts of the configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            status: "healthy".to_string(),
            flow_configured: config.provider.flow_configured(),
            service: config.service.name.clone(),
            provider: config.provider.mode,
        }
    }
}
