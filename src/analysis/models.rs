//! Request and response bodies of the analyze endpoint.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::analysis::error::AnalyzeError;

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalyzeRequest {
    /// Article or page to analyse.
    pub url: Url,
}

impl AnalyzeRequest {
    /// Only absolute http(s) URLs with a host are accepted.
    pub fn validate(&self) -> Result<(), AnalyzeError> {
        if !matches!(self.url.scheme(), "http" | "https") {
            return Err(AnalyzeError::InvalidUrl {
                url: self.url.to_string(),
                reason: "scheme must be http or https",
            });
        }
        if self.url.host_str().map_or(true, str::is_empty) {
            return Err(AnalyzeError::InvalidUrl {
                url: self.url.to_string(),
                reason: "host is missing",
            });
        }
        Ok(())
    }
}

/// Body returned by `POST /analyze` for every handled outcome.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnalyzeResponse {
    pub result: String,
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

fn default_success() -> bool {
    true
}

impl AnalyzeResponse {
    /// Successful outcome.
    pub fn ok(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
            success: true,
            error: None,
        }
    }

    /// Failed outcome carrying a machine-readable code.
    pub fn failure(result: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            result: result.into(),
            success: false,
            error: Some(code.into()),
        }
    }
}

/// Which lookup produced the result text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionPath {
    /// Top-level `result` field.
    ResultField,
    /// `outputs[0].outputs[*].message` of a flow run.
    FlowOutputs,
    /// Generic recursive extractor.
    Generic,
    /// Nothing usable; diagnostic text was synthesized.
    Unparsed,
}

impl ExtractionPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionPath::ResultField => "result_field",
            ExtractionPath::FlowOutputs => "flow_outputs",
            ExtractionPath::Generic => "generic",
            ExtractionPath::Unparsed => "unparsed",
        }
    }
}
