//! List Sales Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    errors::ApiError,
    extensions::*,
    sales::{errors::into_api_error, models::SalesRecordResponse},
    state::State,
};

/// List Sales Handler
#[handler]
#[tracing::instrument(name = "sales.index", skip_all)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<SalesRecordResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let records = state
        .app
        .sales
        .list_sales()
        .await
        .map_err(into_api_error)?;

    Ok(Json(records.into_iter().map(SalesRecordResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use stockroom_app::domain::sales::MockSalesService;

    use crate::test_helpers::{make_sale, sales_service};

    use super::*;

    #[tokio::test]
    async fn test_list_sales_renders_dates() -> TestResult {
        let mut sales = MockSalesService::new();

        sales
            .expect_list_sales()
            .once()
            .return_once(|| Ok(vec![make_sale(1), make_sale(2)]));

        sales.expect_get_sale().never();
        sales.expect_import_sales().never();

        let mut res = TestClient::get("http://example.com/sales")
            .send(&sales_service(sales, Router::with_path("sales").get(handler)))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            json!([
                {
                    "id": 1,
                    "product_name": "Widget",
                    "sales_date": "2024-03-01",
                    "quantity_sold": 3,
                    "total_revenue": 29.97
                },
                {
                    "id": 2,
                    "product_name": "Widget",
                    "sales_date": "2024-03-01",
                    "quantity_sold": 3,
                    "total_revenue": 29.97
                }
            ])
        );

        Ok(())
    }
}
