//! Analyze Sales Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use stockroom_app::analysis::AnalysisRequest;

use crate::{analysis::errors::into_api_error, errors::ApiError, extensions::*, state::State};

/// Analysis Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct AnalysisResponse {
    pub response: String,
}

/// Analyze Sales Handler
///
/// Answers a natural-language question about the supplied sales data.
#[handler]
#[tracing::instrument(name = "analysis.analyze", skip_all)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let body = req.json_within_or_400(state.analysis_body_limit).await?;

    let request: AnalysisRequest = serde_json::from_value(body)
        .map_err(|error| ApiError::bad_request(format!("Invalid payload: {error}")))?;

    let response = state
        .app
        .analysis
        .analyze(request)
        .await
        .map_err(into_api_error)?;

    Ok(Json(AnalysisResponse { response }))
}
