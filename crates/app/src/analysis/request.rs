//! Analysis request payload.

use serde::Deserialize;
use serde_json::Value;

use crate::analysis::errors::AnalysisError;

/// Raw analysis request as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub query: Option<Value>,

    #[serde(default)]
    pub sales_data: Option<Value>,
}

/// A question and data snapshot that are both present and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AnalysisInput {
    pub(crate) query: String,
    pub(crate) sales_data: Value,
}

impl AnalysisRequest {
    /// Reject requests whose question or data snapshot is missing.
    ///
    /// Absent, `null`, blank strings, empty arrays and empty objects all
    /// count as missing. A non-string question is used as its JSON text.
    pub(crate) fn into_input(self) -> Result<AnalysisInput, AnalysisError> {
        let (Some(query), Some(sales_data)) = (
            self.query.filter(is_supplied),
            self.sales_data.filter(is_supplied),
        ) else {
            return Err(AnalysisError::MissingFields);
        };

        let query = match query {
            Value::String(text) => text,
            other => other.to_string(),
        };

        Ok(AnalysisInput { query, sales_data })
    }
}

fn is_supplied(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => !text.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}
