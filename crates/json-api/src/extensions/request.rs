//! Request parsing helpers.

use salvo::{http::ParseError, prelude::Request};
use serde_json::Value;
use stockroom_app::TypedId;
use tracing::debug;

use crate::errors::ApiError;

const INVALID_JSON: &str = "Invalid JSON";

pub(crate) trait RequestExt {
    /// Decode at most `max_size` bytes of body as JSON.
    ///
    /// Yields `None` when the body is missing, malformed or not declared as
    /// JSON, and fails with 413 when it is larger than `max_size`.
    async fn json_body(&mut self, max_size: usize) -> Result<Option<Value>, ApiError>;

    /// Decode the body as JSON within the request's size limit, answering
    /// 400 `Invalid JSON` when it cannot be read.
    async fn json_or_400(&mut self) -> Result<Value, ApiError>;

    /// Like [`RequestExt::json_or_400`], with an explicit size limit.
    async fn json_within_or_400(&mut self, max_size: usize) -> Result<Value, ApiError>;

    /// Read an integer path id, answering 404 with `missing` when it is not
    /// an integer.
    fn id_or_404<T>(&self, key: &str, missing: &str) -> Result<TypedId<T>, ApiError>;
}

impl RequestExt for Request {
    async fn json_body(&mut self, max_size: usize) -> Result<Option<Value>, ApiError> {
        match self.parse_json_with_max_size::<Value>(max_size).await {
            Ok(body) => Ok(Some(body)),
            Err(ParseError::PayloadTooLarge) => {
                debug!(max_size, "rejected oversized request body");

                Err(ApiError::payload_too_large())
            }
            Err(error) => {
                debug!("rejected request body: {error}");

                Ok(None)
            }
        }
    }

    async fn json_or_400(&mut self) -> Result<Value, ApiError> {
        let max_size = self.secure_max_size();

        self.json_within_or_400(max_size).await
    }

    async fn json_within_or_400(&mut self, max_size: usize) -> Result<Value, ApiError> {
        self.json_body(max_size)
            .await?
            .ok_or_else(|| ApiError::bad_request(INVALID_JSON))
    }

    fn id_or_404<T>(&self, key: &str, missing: &str) -> Result<TypedId<T>, ApiError> {
        self.param::<i64>(key)
            .map(TypedId::from_i64)
            .ok_or_else(|| ApiError::not_found(missing))
    }
}
