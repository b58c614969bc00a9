//! HTTP client for the flow service.
//!
//! # Responsibilities
//! - Build the fixed-shape chat payload carrying the requested URL
//! - POST it to the configured flow endpoint with a deadline
//! - Hand back the parsed JSON tree untouched

use std::time::{Duration, Instant};

use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::observability::metrics;
use crate::upstream::error::UpstreamError;

/// Body sent to the flow run endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct FlowRequest<'a> {
    pub input_value: &'a str,
    pub output_type: &'static str,
    pub input_type: &'static str,
    pub tweaks: serde_json::Map<String, Value>,
}

impl<'a> FlowRequest<'a> {
    /// Chat-in, chat-out request with no tweaks.
    pub fn chat(input_value: &'a str) -> Self {
        Self {
            input_value,
            output_type: "chat",
            input_type: "chat",
            tweaks: serde_json::Map::new(),
        }
    }
}

/// Successful flow answer.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub payload: Value,
}

/// Flow service client bound to one endpoint.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct FlowClient {
    client: Client,
    endpoint: Url,
    timeout_secs: u64,
}

impl FlowClient {
    /// Create a client for `endpoint` with the given deadline and user agent.
    pub fn new(endpoint: Url, timeout_secs: u64, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            timeout_secs,
        })
    }

    /// The flow endpoint this client posts to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Forward `resource` to the flow and return its parsed answer.
    pub async fn send(&self, resource: &Url) -> Result<UpstreamResponse, UpstreamError> {
        let start = Instant::now();
        let result = self.send_inner(resource).await;
        metrics::record_upstream_call(start);
        result
    }

    async fn send_inner(&self, resource: &Url) -> Result<UpstreamResponse, UpstreamError> {
        let body = FlowRequest::chat(resource.as_str());

        tracing::debug!(
            endpoint = %self.endpoint,
            resource = %resource,
            "Sending flow request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| UpstreamError::from_transport(e, self.timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Http {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::from_transport(e, self.timeout_secs))?;
        let payload = parse_payload(&bytes)?;

        tracing::debug!(status = %status, bytes = bytes.len(), "Flow response received");

        Ok(UpstreamResponse { status, payload })
    }
}

/// Parse a flow body of any nesting depth.
///
/// serde_json stops at 128 levels by default; the limit is lifted here and
/// the parser grows its stack on demand instead. Extraction applies its own
/// depth bound afterwards.
pub fn parse_payload(bytes: &[u8]) -> Result<Value, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}
