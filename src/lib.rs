//! TrueEye analysis proxy library.

pub mod analysis;
pub mod config;
pub mod extract;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use analysis::{AnalyzeRequest, AnalyzeResponse, Analyzer};
pub use config::AppConfig;
pub use extract::extract_text;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
