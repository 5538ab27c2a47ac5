//! Analysis delegate errors.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Missing required fields: query, sales_data")]
    MissingFields,

    #[error("Failed to get a response from the analysis service.")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to get a response from the analysis service.")]
    UpstreamStatus { status: StatusCode, body: String },

    #[error("Unexpected response format from the analysis service.")]
    UnexpectedFormat,
}
