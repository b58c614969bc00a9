//! Hard failures mapped to HTTP statuses.
//!
//! Upstream problems never reach this type; they are reported in a 200
//! `AnalyzeResponse`. Only configuration and input errors end up here.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::analysis::AnalyzeError;

/// Error returned by HTTP handlers, rendered as `{"detail": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Analyze(#[from] AnalyzeError),

    #[error("{0}")]
    Rejected(#[from] JsonRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Analyze(AnalyzeError::NotConfigured) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Analyze(AnalyzeError::InvalidUrl { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Analyze(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Rejected(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            ApiError::Rejected(rejection) => rejection.body_text(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(status = %status, detail = %detail, "Request failed");
        } else {
            tracing::warn!(status = %status, detail = %detail, "Request rejected");
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(AnalyzeError::NotConfigured).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::from(AnalyzeError::InvalidUrl {
                url: "mailto:a@b.c".into(),
                reason: "scheme must be http or https",
            })
            .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn test_detail_body() {
        let response = ApiError::from(AnalyzeError::NotConfigured).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["detail"].as_str().unwrap().contains("FLOW_API_URL"));
    }
}
