//! List Products Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{errors::into_api_error, models::ProductResponse},
    state::State,
};

/// List Products Handler
#[handler]
#[tracing::instrument(name = "products.index", skip_all)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .map_err(into_api_error)?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}
