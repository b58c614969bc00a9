//! TrueEye analysis proxy.
//!
//! Accepts a URL, forwards it to a flow service for analysis, and returns
//! the text the flow produced.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────────┐
//!                      │                 TRUEEYE PROXY                 │
//!                      │                                               │
//!   POST /analyze      │  ┌──────────┐   ┌──────────┐   ┌──────────┐   │
//!   ───────────────────┼─▶│   http   │──▶│ analysis │──▶│ upstream │───┼──▶ Flow
//!                      │  │  server  │   │ handler  │   │  client  │   │    service
//!                      │  └──────────┘   └────┬─────┘   └──────────┘   │
//!                      │                      │                        │
//!   {result, success,  │                      ▼                        │
//!    error}            │               ┌────────────┐                  │
//!   ◀──────────────────┼───────────────│  extract   │                  │
//!                      │               └────────────┘                  │
//!                      │                                               │
//!                      │  config · health · observability · lifecycle  │
//!                      └───────────────────────────────────────────────┘
//! ```

use trueeye::config;
use trueeye::lifecycle;
use trueeye::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_from_env()?;

    logging::init_logging(&config.observability);
    tracing::info!("trueeye v{} starting", env!("CARGO_PKG_VERSION"));

    lifecycle::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
