//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters, histograms via `metrics`)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - The subscriber is installed once by `main`; library code only emits events
//! - Request ID flows through the request span
//! - Metric calls are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
