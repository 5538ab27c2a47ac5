//! Products service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::products::validation::ValidationError;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product with name '{0}' already exists")]
    AlreadyExists(String),

    #[error("product not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl ProductsServiceError {
    /// Classify a store error raised while writing the product named `name`.
    pub(crate) fn from_write(error: Error, name: &str) -> Self {
        if matches!(kind_of(&error), Some(ErrorKind::UniqueViolation)) {
            return Self::AlreadyExists(name.to_string());
        }

        error.into()
    }
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match kind_of(&error) {
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::UniqueViolation | _) | None => Self::Sql(error),
        }
    }
}

fn kind_of(error: &Error) -> Option<ErrorKind> {
    error.as_database_error().map(DatabaseError::kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = ProductsServiceError::from(Error::RowNotFound);

        assert!(matches!(error, ProductsServiceError::NotFound));
    }

    #[test]
    fn non_database_errors_stay_generic_on_write() {
        let error = ProductsServiceError::from_write(Error::PoolTimedOut, "Widget");

        assert!(
            matches!(error, ProductsServiceError::Sql(Error::PoolTimedOut)),
            "expected Sql, got {error:?}"
        );
    }
}
