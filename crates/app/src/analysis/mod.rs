//! Sales analysis delegate.
//!
//! Forwards a natural-language question about a caller-supplied sales snapshot
//! to an external text-generation endpoint and returns the generated answer.

pub mod client;
pub mod config;
pub mod errors;
mod prompt;
pub mod request;
pub mod service;

pub use client::InferenceClient;
pub use config::AnalysisConfig;
pub use errors::AnalysisError;
pub use request::AnalysisRequest;
pub use service::*;
