//! Update Product Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde_json::Value;

use stockroom_app::domain::products::records::ProductRecord;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        errors::{NOT_FOUND_MESSAGE, into_api_error},
        models::ProductResponse,
    },
    state::State,
};

/// Update Product Handler
///
/// An unreadable body is passed on as `null`, so a missing product still
/// answers 404 before the body is rejected.
#[handler]
#[tracing::instrument(
    name = "products.update",
    skip_all,
    fields(product_id = tracing::field::Empty)
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = req.id_or_404::<ProductRecord>("id", NOT_FOUND_MESSAGE)?;

    tracing::Span::current().record("product_id", tracing::field::display(product));

    let max_size = req.secure_max_size();
    let body = req.json_body(max_size).await?.unwrap_or(Value::Null);

    let updated = state
        .app
        .products
        .update_product(product, body)
        .await
        .map_err(into_api_error)?;

    Ok(Json(updated.into()))
}
