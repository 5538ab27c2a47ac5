//! Product payload validation.
//!
//! Numeric fields are strict about JSON types: `price` takes any JSON number,
//! `quantity` only JSON integers. Strings, booleans and nulls are rejected for
//! both rather than coerced.

use serde_json::Value;
use thiserror::Error;

use crate::domain::products::data::{NewProduct, ProductPayload, ProductUpdate};

/// Maximum product name length, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid JSON")]
    InvalidJson,

    #[error("Invalid payload: {0}")]
    UnexpectedShape(String),

    #[error("Missing required fields: name, price, quantity")]
    MissingRequiredFields,

    #[error("Name must be a non-empty string")]
    InvalidName,

    #[error("Name must be at most {MAX_NAME_LENGTH} characters")]
    NameTooLong,

    #[error("Description must be a string or null")]
    InvalidDescription,

    #[error("Price must be a non-negative number")]
    InvalidPrice,

    #[error("Quantity must be a non-negative integer")]
    InvalidQuantity,
}

impl ProductPayload {
    /// Interpret a decoded JSON body as a product payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidJson`] unless `body` is a non-empty
    /// object, and [`ValidationError::UnexpectedShape`] for unknown fields.
    pub fn from_json(body: Value) -> Result<Self, ValidationError> {
        match &body {
            Value::Object(fields) if !fields.is_empty() => {}
            _ => return Err(ValidationError::InvalidJson),
        }

        serde_json::from_value(body)
            .map_err(|error| ValidationError::UnexpectedShape(error.to_string()))
    }
}

/// Validate a create payload. `name`, `price` and `quantity` are required.
///
/// # Errors
///
/// Returns the first failing field check.
pub fn new_product(payload: ProductPayload) -> Result<NewProduct, ValidationError> {
    let (Some(name), Some(price), Some(quantity)) = (
        payload.name.filter(is_supplied),
        payload.price.filter(is_supplied),
        payload.quantity.filter(is_supplied),
    ) else {
        return Err(ValidationError::MissingRequiredFields);
    };

    Ok(NewProduct {
        name: name_field(name)?,
        description: payload.description.map(description_field).transpose()?.flatten(),
        price: price_field(&price)?,
        quantity: quantity_field(&quantity)?,
    })
}

/// Validate an update payload. Only fields present in `payload` are checked.
///
/// # Errors
///
/// Returns the first failing field check.
pub fn product_update(payload: ProductPayload) -> Result<ProductUpdate, ValidationError> {
    Ok(ProductUpdate {
        name: payload.name.map(name_field).transpose()?,
        description: payload.description.map(description_field).transpose()?,
        price: payload.price.as_ref().map(price_field).transpose()?,
        quantity: payload.quantity.as_ref().map(quantity_field).transpose()?,
    })
}

fn is_supplied(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => !text.is_empty(),
        _ => true,
    }
}

fn name_field(value: Value) -> Result<String, ValidationError> {
    let Value::String(name) = value else {
        return Err(ValidationError::InvalidName);
    };

    if name.trim().is_empty() {
        return Err(ValidationError::InvalidName);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong);
    }

    Ok(name)
}

fn description_field(value: Value) -> Result<Option<String>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::String(description) => Ok(Some(description)),
        _ => Err(ValidationError::InvalidDescription),
    }
}

fn price_field(value: &Value) -> Result<f64, ValidationError> {
    value
        .as_f64()
        .filter(|price| price.is_finite() && *price >= 0.0)
        .ok_or(ValidationError::InvalidPrice)
}

fn quantity_field(value: &Value) -> Result<i64, ValidationError> {
    value
        .as_i64()
        .filter(|quantity| *quantity >= 0)
        .ok_or(ValidationError::InvalidQuantity)
}
