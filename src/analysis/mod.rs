//! Analysis subsystem.
//!
//! # Data Flow
//! ```text
//! AnalyzeRequest (validated URL)
//!     → handler.rs
//!         local mode  → canned answer embedding the URL
//!         remote mode → upstream::FlowClient
//!                     → structured fast-path (result / outputs[0].outputs[*].message)
//!                     → extract::extract_text over the whole tree
//!                     → diagnostic "could not extract" text
//!     → AnalyzeResponse
//! ```
//!
//! # Design Decisions
//! - Mode is fixed at startup; nothing is decided per request
//! - Upstream failures become `success = false` bodies, not HTTP errors
//! - Only a missing flow endpoint is a hard error (503)

pub mod error;
pub mod handler;
pub mod models;

pub use error::AnalyzeError;
pub use handler::{interpret_payload, Analyzer};
pub use models::{AnalyzeRequest, AnalyzeResponse, ExtractionPath};
