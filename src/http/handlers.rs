//! Route handlers.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use crate::analysis::{AnalyzeRequest, AnalyzeResponse};
use crate::health::HealthReport;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(state.health.as_ref().clone())
}

/// `POST /analyze`
///
/// Upstream failures come back as 200 with `success = false`; only a missing
/// flow endpoint (503) and bad input (4xx) produce error statuses. The body
/// is read as JSON whatever `Content-Type` the caller sent.
pub async fn analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(request) = Json::<AnalyzeRequest>::from_bytes(&body)?;
    request.validate()?;

    let response = state.analyzer.analyze(&request.url).await?;
    Ok(Json(response))
}
