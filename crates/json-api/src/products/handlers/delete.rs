//! Delete Product Handler

use std::sync::Arc;

use salvo::prelude::*;

use stockroom_app::domain::products::records::ProductRecord;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        errors::{NOT_FOUND_MESSAGE, into_api_error},
        models::MessageResponse,
    },
    state::State,
};

/// Delete Product Handler
#[handler]
#[tracing::instrument(name = "products.delete", skip_all)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = req.id_or_404::<ProductRecord>("id", NOT_FOUND_MESSAGE)?;

    state
        .app
        .products
        .delete_product(product)
        .await
        .map_err(into_api_error)?;

    Ok(Json(MessageResponse {
        message: "Product deleted successfully".to_string(),
    }))
}
