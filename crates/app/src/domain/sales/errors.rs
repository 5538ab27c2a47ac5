//! Sales service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SalesServiceError {
    #[error("sales record not found")]
    NotFound,

    #[error("row {row}: product name must not be empty")]
    MissingProductName { row: usize },

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for SalesServiceError {
    fn from(error: Error) -> Self {
        match error {
            Error::RowNotFound => Self::NotFound,
            _ => Self::Sql(error),
        }
    }
}
