//! Analysis service.

use async_trait::async_trait;
use mockall::automock;

use crate::analysis::{errors::AnalysisError, request::AnalysisRequest};

/// Answer returned while no inference endpoint is configured.
pub const NOT_CONFIGURED_RESPONSE: &str = "[Analysis not configured] Set GENAI_API_KEY and \
     GENAI_MODEL_ID to enable AI-generated answers about your sales data.";

#[automock]
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Answers `request.query` using only `request.sales_data`.
    ///
    /// Missing input is rejected before any outbound call. Without configured
    /// credentials the fixed [`NOT_CONFIGURED_RESPONSE`] is returned.
    async fn analyze(&self, request: AnalysisRequest) -> Result<String, AnalysisError>;
}
