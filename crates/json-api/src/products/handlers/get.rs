//! Get Product Handler

use std::sync::Arc;

use salvo::prelude::*;

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

/// Get Product Handler
#[handler]
#[tracing::instrument(name = "products.get", skip_all)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = req.id_or_404::<ProductRecord>("id", NOT_FOUND_MESSAGE)?;

    let product = state
        .app
        .products
        .get_product(product)
        .await
        .map_err(into_api_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use stockroom_app::domain::products::{
        MockProductsService, ProductsServiceError, records::ProductId,
    };

    use crate::{
        errors::ErrorResponse,
        test_helpers::{make_product, products_service},
    };

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_product_success() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .withf(|id| *id == ProductId::from_i64(7))
            .return_once(|_| Ok(make_product(7)));

        let mut res = TestClient::get("http://example.com/products/7")
            .send(&make_service(products))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, 7);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_not_found_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let mut res = TestClient::get("http://example.com/products/99")
            .send(&make_service(products))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.error, "Product not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_non_integer_id_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_get_product().never();

        let res = TestClient::get("http://example.com/products/abc")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
