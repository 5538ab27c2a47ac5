//! Analysis Errors

use salvo::http::StatusCode;
use stockroom_app::analysis::AnalysisError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: AnalysisError) -> ApiError {
    match error {
        AnalysisError::MissingFields => ApiError::bad_request(error.to_string()),
        AnalysisError::Transport(_)
        | AnalysisError::UpstreamStatus { .. }
        | AnalysisError::UnexpectedFormat => {
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    }
}
