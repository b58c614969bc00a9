//! Startup orchestration.
//!
//! # Responsibilities
//! - Start the metrics exporter when enabled
//! - Build the analyzer and router from the validated configuration
//! - Bind the listener and serve until a shutdown signal arrives

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::analysis::AnalyzeError;
use crate::config::AppConfig;
use crate::http::HttpServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::observability::metrics;

/// Fatal startup failures.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to initialize analyzer: {0}")]
    Analyzer(#[from] AnalyzeError),

    #[error("failed to start metrics exporter: {0}")]
    Metrics(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the service with `config` until SIGINT/SIGTERM.
pub async fn run(config: AppConfig) -> Result<(), StartupError> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        provider = config.provider.mode.as_str(),
        flow_timeout_secs = config.provider.timeout_secs,
        request_timeout_secs = config.listener.request_timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|e: std::net::AddrParseError| StartupError::Metrics(e.to_string()))?;
        metrics::init_metrics(addr).map_err(|e| StartupError::Metrics(e.to_string()))?;
    }

    let server = HttpServer::new(config.clone())?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let signal_task = shutdown.trigger_on_signal();

    server.run(listener, shutdown.subscribe()).await?;
    signal_task.abort();

    Ok(())
}
