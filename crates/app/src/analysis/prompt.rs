//! Instruction prompt for the text-generation endpoint.

use serde_json::Value;

/// Compose the single instruction prompt sent upstream.
pub(crate) fn compose(query: &str, sales_data: &Value) -> String {
    let data = serde_json::to_string_pretty(sales_data).unwrap_or_else(|_| sales_data.to_string());

    format!(
        "You are a sales analyst. Answer the question using only the sales data \
         provided below. If the data does not contain the answer, say so instead \
         of guessing.\n\n\
         Sales data:\n{data}\n\n\
         Question: {query}\n\n\
         Answer:"
    )
}
