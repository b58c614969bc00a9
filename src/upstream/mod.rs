//! Upstream flow service subsystem.
//!
//! # Data Flow
//! ```text
//! requested URL
//!     → client.rs (build flow payload, POST with deadline)
//!     → error.rs (classify transport / status / decode failures)
//!     → UpstreamResponse (status + parsed JSON tree, unmodified)
//! ```
//!
//! # Design Decisions
//! - Exactly one outbound attempt per call; no retries
//! - Every call has a finite deadline
//! - Failures are values with stable codes, never panics

pub mod client;
pub mod error;

pub use client::{FlowClient, FlowRequest, UpstreamResponse};
pub use error::UpstreamError;
