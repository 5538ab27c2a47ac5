//! Products Data

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::products::records::ProductRecord;

/// Raw product payload as received from a client.
///
/// Every field distinguishes "absent" (`None`) from "present" (`Some`, which
/// may hold `Value::Null`). Types and ranges are checked by
/// [`validation`](super::validation).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductPayload {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    pub description: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    pub price: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    pub quantity: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i64,
}

/// Product Update Data
///
/// `None` leaves a column untouched. `description: Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl ProductUpdate {
    /// Apply this update on top of the current column values.
    #[must_use]
    pub fn merge(self, current: NewProduct) -> NewProduct {
        NewProduct {
            name: self.name.unwrap_or(current.name),
            description: self.description.unwrap_or(current.description),
            price: self.price.unwrap_or(current.price),
            quantity: self.quantity.unwrap_or(current.quantity),
        }
    }
}

impl From<ProductRecord> for NewProduct {
    fn from(record: ProductRecord) -> Self {
        Self {
            name: record.name,
            description: record.description,
            price: record.price,
            quantity: record.quantity,
        }
    }
}
