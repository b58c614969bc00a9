//! Hard failures of the analysis handler.
//!
//! Upstream trouble is not listed here; it is reported inside
//! `AnalyzeResponse` with `success = false`.

use thiserror::Error;

/// Errors that abort an analysis request.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Remote mode is active but no flow endpoint was configured.
    #[error("FLOW_API_URL is not configured; analysis cannot be performed")]
    NotConfigured,

    /// The requested URL is not an absolute http(s) URL.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: &'static str },

    /// The configured flow endpoint does not parse.
    #[error("invalid flow endpoint '{url}': {source}")]
    InvalidFlowUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build flow client: {0}")]
    Client(#[from] reqwest::Error),
}
