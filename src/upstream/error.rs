//! Upstream failure taxonomy.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::io;

use thiserror::Error;

/// Errors produced while talking to the flow service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request (or reading its body) exceeded the configured deadline.
    #[error("flow request timed out after {0} seconds")]
    Timeout(u64),

    /// DNS failure, refused or reset connection.
    #[error("cannot reach flow service: {0}")]
    Connection(String),

    /// The flow service answered with a non-2xx status.
    #[error("flow service returned HTTP {status}")]
    Http { status: u16 },

    /// The body was not valid JSON.
    #[error("flow service returned a non-JSON body: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// Anything else.
    #[error("unexpected flow client error: {0}")]
    Unknown(String),
}

impl UpstreamError {
    /// Classify a transport error from reqwest.
    ///
    /// Status codes are checked by the caller before the body is read, so
    /// they never arrive here.
    pub fn from_transport(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            return UpstreamError::Timeout(timeout_secs);
        }
        if err.is_connect() || has_connection_io_error(&err) {
            return UpstreamError::Connection(err.to_string());
        }
        UpstreamError::Unknown(err.to_string())
    }

    /// Stable machine-readable code surfaced to API callers.
    pub fn code(&self) -> Cow<'static, str> {
        match self {
            UpstreamError::Timeout(_) => Cow::Borrowed("timeout"),
            UpstreamError::Connection(_) => Cow::Borrowed("connection"),
            UpstreamError::Http { status } => Cow::Owned(format!("http_{}", status)),
            UpstreamError::InvalidResponse(_) => Cow::Borrowed("invalid_response"),
            UpstreamError::Unknown(_) => Cow::Borrowed("unknown"),
        }
    }

    /// Human-readable explanation shown in the `result` field.
    pub fn user_message(&self) -> String {
        match self {
            UpstreamError::Timeout(_) => "❌ Error: the request timed out. The analysis may be too \
                complex or the service is overloaded."
                .to_string(),
            UpstreamError::Connection(_) => "❌ Error: cannot connect to the analysis service. \
                Check the FLOW_API_URL configuration."
                .to_string(),
            UpstreamError::Http { status } => {
                format!("❌ Server error: the analysis service answered with HTTP {}.", status)
            }
            UpstreamError::InvalidResponse(_) => {
                "⚠️ The upstream service returned a non-JSON response.".to_string()
            }
            UpstreamError::Unknown(detail) => format!("❌ Unexpected error: {}", detail),
        }
    }
}

// Resets and refusals surfacing mid-request are not flagged by `is_connect`.
fn has_connection_io_error(err: &reqwest::Error) -> bool {
    let mut source = err.source();
    while let Some(cause) = source {
        if let Some(io_err) = cause.downcast_ref::<io::Error>() {
            return matches!(
                io_err.kind(),
                io::ErrorKind::ConnectionRefused
                    | io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
                    | io::ErrorKind::BrokenPipe
                    | io::ErrorKind::NotConnected
            );
        }
        source = cause.source();
    }
    false
}
