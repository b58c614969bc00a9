//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, CORS, timeout, body limit)
//! - Serve the static frontend
//! - Bind server to listener and shut down gracefully

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::analysis::{AnalyzeError, Analyzer};
use crate::config::{AppConfig, Provider};
use crate::health::HealthReport;
use crate::http::handlers;
use crate::http::request::{make_span, MakeRequestUuidV4};

/// Application state injected into handlers.
///
/// Read-only after startup; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub health: Arc<HealthReport>,
}

impl AppState {
    pub fn new(analyzer: Analyzer, health: HealthReport) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            health: Arc::new(health),
        }
    }
}

/// HTTP server for the analysis service.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Result<Self, AnalyzeError> {
        let analyzer = Analyzer::from_config(&config.provider)?;

        if config.provider.mode == Provider::Remote && !config.provider.flow_configured() {
            tracing::warn!(
                "FLOW_API_URL is not configured; analysis requests will fail until it is set"
            );
        }

        let state = AppState::new(analyzer, HealthReport::from_config(&config));
        let router = Self::build_router(&config, state);

        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(config: &AppConfig, state: AppState) -> Router {
        let static_dir = PathBuf::from(&config.service.static_dir);

        Router::new()
            .route("/health", get(handlers::health))
            .route("/analyze", post(handlers::analyze))
            .route_service("/", ServeFile::new(static_dir.join("index.html")))
            .nest_service("/static", ServeDir::new(&static_dir))
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.listener.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(CorsLayer::permissive())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(make_span))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            provider = self.config.provider.mode.as_str(),
            flow_configured = self.config.provider.flow_configured(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
