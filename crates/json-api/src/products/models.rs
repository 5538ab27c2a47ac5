//! Product response bodies.

use serde::{Deserialize, Serialize};

use stockroom_app::{domain::products::records::ProductRecord, timestamps};

/// Product as rendered to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<ProductRecord> for ProductResponse {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id.into_i64(),
            name: record.name,
            description: record.description,
            price: record.price,
            quantity: record.quantity,
            created_at: record.created_at.as_ref().map(timestamps::render),
            updated_at: record.updated_at.as_ref().map(timestamps::render),
        }
    }
}

/// Acknowledgement body for deletions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use serde_json::json;
    use testresult::TestResult;

    use stockroom_app::domain::products::records::ProductId;

    use super::*;

    #[test]
    fn renders_flat_map_with_explicit_nulls() -> TestResult {
        let record = ProductRecord {
            id: ProductId::from_i64(3),
            name: "Widget".to_string(),
            description: None,
            price: 9.99,
            quantity: 10,
            created_at: Some("2026-01-02T03:04:05.6Z".parse::<Timestamp>()?),
            updated_at: None,
        };

        let body = serde_json::to_value(ProductResponse::from(record))?;

        assert_eq!(
            body,
            json!({
                "id": 3,
                "name": "Widget",
                "description": null,
                "price": 9.99,
                "quantity": 10,
                "created_at": "2026-01-02T03:04:05.600Z",
                "updated_at": null
            })
        );

        Ok(())
    }
}
