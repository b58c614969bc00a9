//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check that the flow endpoint is an http(s) URL when set in remote mode
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - A missing flow endpoint is not an error; startup only warns about it

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::{AppConfig, Provider};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("observability.metrics_address '{0}' is not a socket address")]
    MetricsAddress(String),

    #[error("{field} must be greater than zero")]
    ZeroValue { field: &'static str },

    #[error("provider.flow_api_url '{0}' is not an http(s) URL")]
    FlowUrl(String),

    #[error(
        "listener.request_timeout_secs ({inbound}) must not be shorter than \
         provider.timeout_secs ({upstream})"
    )]
    TimeoutOrder { inbound: u64, upstream: u64 },
}

/// Check a loaded configuration, collecting every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.listener.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroValue { field: "listener.request_timeout_secs" });
    }
    if config.listener.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroValue { field: "listener.max_body_bytes" });
    }
    if config.provider.timeout_secs == 0 {
        errors.push(ValidationError::ZeroValue { field: "provider.timeout_secs" });
    }

    if config.listener.request_timeout_secs < config.provider.timeout_secs {
        errors.push(ValidationError::TimeoutOrder {
            inbound: config.listener.request_timeout_secs,
            upstream: config.provider.timeout_secs,
        });
    }

    // Local mode never reads the endpoint.
    if config.provider.mode == Provider::Remote {
        if let Some(raw) = config.provider.flow_api_url.as_deref().map(str::trim) {
            if !raw.is_empty() && !is_http_url(raw) {
                errors.push(ValidationError::FlowUrl(raw.to_string()));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_http_url(raw: &str) -> bool {
    Url::parse(raw)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false)
}
