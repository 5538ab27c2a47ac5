//! Get Sales Record Handler

use std::sync::Arc;

use salvo::prelude::*;

use stockroom_app::domain::sales::records::SalesRecord;

use crate::{
    errors::ApiError,
    extensions::*,
    sales::{
        errors::{NOT_FOUND_MESSAGE, into_api_error},
        models::SalesRecordResponse,
    },
    state::State,
};

/// Get Sales Record Handler
#[handler]
#[tracing::instrument(name = "sales.get", skip_all)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<SalesRecordResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let sale = req.id_or_404::<SalesRecord>("id", NOT_FOUND_MESSAGE)?;

    let record = state
        .app
        .sales
        .get_sale(sale)
        .await
        .map_err(into_api_error)?;

    Ok(Json(record.into()))
}
