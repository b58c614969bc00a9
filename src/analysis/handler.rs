//! Analysis orchestration.
//!
//! # Responsibilities
//! - Serve canned answers in local mode
//! - Forward to the flow service in remote mode
//! - Turn whatever JSON comes back into a single text result
//! - Convert upstream failures into `success = false` responses

use serde_json::Value;
use url::Url;

use crate::analysis::error::AnalyzeError;
use crate::analysis::models::{AnalyzeResponse, ExtractionPath};
use crate::config::{Provider, ProviderConfig};
use crate::extract::extract_text;
use crate::observability::metrics;
use crate::upstream::{FlowClient, UpstreamError};

/// Characters of the raw payload echoed back when nothing could be extracted.
const DIAGNOSTIC_PREVIEW_CHARS: usize = 200;

/// Request handler shared by all inbound calls.
///
/// Built once at startup; holds no per-request state.
#[derive(Debug, Clone)]
pub struct Analyzer {
    provider: Provider,
    client: Option<FlowClient>,
}

impl Analyzer {
    /// Build the analyzer from provider settings.
    ///
    /// A missing flow endpoint is not an error here: remote mode then fails
    /// each request with [`AnalyzeError::NotConfigured`].
    pub fn from_config(config: &ProviderConfig) -> Result<Self, AnalyzeError> {
        let flow_api_url = config
            .flow_api_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty());

        let client = match (config.mode, flow_api_url) {
            (Provider::Remote, Some(raw)) => {
                let endpoint = Url::parse(raw).map_err(|source| AnalyzeError::InvalidFlowUrl {
                    url: raw.to_string(),
                    source,
                })?;
                Some(FlowClient::new(endpoint, config.timeout_secs, &config.user_agent)?)
            }
            _ => None,
        };

        Ok(Self {
            provider: config.mode,
            client,
        })
    }

    /// Analyzer that never touches the network.
    pub fn local() -> Self {
        Self {
            provider: Provider::Local,
            client: None,
        }
    }

    /// Analyzer forwarding to an already built client.
    pub fn remote(client: Option<FlowClient>) -> Self {
        Self {
            provider: Provider::Remote,
            client,
        }
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Analyse `url` according to the configured mode.
    #[tracing::instrument(name = "analyze", skip(self), fields(provider = self.provider.as_str()))]
    pub async fn analyze(&self, url: &Url) -> Result<AnalyzeResponse, AnalyzeError> {
        tracing::info!(url = %url, "Received analysis request");

        if self.provider == Provider::Local {
            metrics::record_outcome("local");
            return Ok(AnalyzeResponse::ok(format!(
                "This is a local analysis stub. In remote mode, the content at {} \
                 would be processed by the TrueEye pipeline.",
                url
            )));
        }

        let client = match &self.client {
            Some(client) => client,
            None => {
                tracing::error!("Analysis requested but no flow endpoint is configured");
                metrics::record_outcome("not_configured");
                return Err(AnalyzeError::NotConfigured);
            }
        };

        let upstream = match client.send(url).await {
            Ok(upstream) => upstream,
            Err(e) => {
                let code = e.code();
                match &e {
                    UpstreamError::InvalidResponse(_) => {
                        tracing::warn!(error = %e, "Received non-JSON response from flow");
                    }
                    _ => {
                        tracing::error!(error = %e, code = %code, "Flow request failed");
                    }
                }
                metrics::record_outcome(code.as_ref());
                return Ok(AnalyzeResponse::failure(e.user_message(), code));
            }
        };

        let (text, path) = interpret_payload(&upstream.payload);
        match path {
            ExtractionPath::ResultField | ExtractionPath::FlowOutputs => {
                tracing::debug!(path = path.as_str(), "Structured fast-path matched");
            }
            ExtractionPath::Generic => {
                tracing::info!("Structured fast-path missed; generic extractor used");
            }
            ExtractionPath::Unparsed => {
                tracing::warn!(status = %upstream.status, "No text could be extracted from flow response");
            }
        }
        metrics::record_outcome(path.as_str());

        tracing::info!("Analysis completed successfully");
        Ok(AnalyzeResponse::ok(text))
    }
}

/// Turn a flow answer into result text, reporting which lookup matched.
///
/// Structured shapes are tried first, then the generic extractor, then a
/// diagnostic preview of the raw payload.
pub fn interpret_payload(payload: &Value) -> (String, ExtractionPath) {
    if let Some(found) = structured_text(payload) {
        return found;
    }

    if let Some(text) = extract_text(payload).filter(|t| !t.is_empty()) {
        return (text.to_string(), ExtractionPath::Generic);
    }

    let preview: String = payload.to_string().chars().take(DIAGNOSTIC_PREVIEW_CHARS).collect();
    (
        format!(
            "⚠️ The request was processed but no result could be extracted. Response: {}",
            preview
        ),
        ExtractionPath::Unparsed,
    )
}

fn structured_text(payload: &Value) -> Option<(String, ExtractionPath)> {
    let map = payload.as_object()?;

    if let Some(result) = map.get("result") {
        return render_scalar(result)
            .filter(|t| !t.is_empty())
            .map(|t| (t, ExtractionPath::ResultField));
    }

    let first = map.get("outputs")?.as_array()?.first()?;
    let nodes = first.get("outputs").and_then(Value::as_array)?;

    nodes
        .iter()
        .filter_map(|node| node.get("message"))
        .filter_map(message_text)
        .find(|t| !t.is_empty())
        .map(|t| (t, ExtractionPath::FlowOutputs))
}

fn message_text(message: &Value) -> Option<String> {
    match message {
        Value::Object(fields) => fields.get("text").and_then(render_scalar),
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn render_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
