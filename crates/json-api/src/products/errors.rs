//! Product Errors

use tracing::error;

use stockroom_app::domain::products::{ProductsServiceError, validation::ValidationError};

use crate::errors::ApiError;

pub(crate) const NOT_FOUND_MESSAGE: &str = "Product not found";

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::AlreadyExists(name) => {
            ApiError::conflict(format!("Product with name '{name}' already exists."))
        }
        ProductsServiceError::NotFound => ApiError::not_found(NOT_FOUND_MESSAGE),
        ProductsServiceError::Validation(validation) => ApiError::bad_request(validation.to_string()),
        ProductsServiceError::MissingRequiredData => {
            ApiError::bad_request("Missing required fields: name, price, quantity")
        }
        ProductsServiceError::InvalidData => ApiError::bad_request("Invalid product data"),
        ProductsServiceError::Sql(source) => {
            error!("product storage failure: {source}");

            ApiError::internal()
        }
    }
}

pub(crate) fn invalid_payload(error: ValidationError) -> ApiError {
    ApiError::bad_request(error.to_string())
}
