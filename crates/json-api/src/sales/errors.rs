//! Sales Errors

use tracing::error;

use stockroom_app::domain::sales::SalesServiceError;

use crate::errors::ApiError;

pub(crate) const NOT_FOUND_MESSAGE: &str = "Sales record not found";

pub(crate) fn into_api_error(error: SalesServiceError) -> ApiError {
    match error {
        SalesServiceError::NotFound => ApiError::not_found(NOT_FOUND_MESSAGE),
        SalesServiceError::MissingProductName { .. } => ApiError::bad_request(error.to_string()),
        SalesServiceError::Sql(source) => {
            error!("sales storage failure: {source}");

            ApiError::internal()
        }
    }
}
