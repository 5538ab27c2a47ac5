//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use stockroom_app::domain::products::data::ProductPayload;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        errors::{into_api_error, invalid_payload},
        models::ProductResponse,
    },
    state::State,
};

/// Create Product Handler
#[handler]
#[tracing::instrument(name = "products.create", skip_all, fields(product_id = tracing::field::Empty))]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let payload = ProductPayload::from_json(req.json_or_400().await?).map_err(invalid_payload)?;

    let product = state
        .app
        .products
        .create_product(payload)
        .await
        .map_err(into_api_error)?;

    tracing::Span::current().record("product_id", tracing::field::display(product.id));

    res.add_header(LOCATION, format!("/products/{}", product.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use stockroom_app::domain::products::{
        MockProductsService, ProductsServiceError, validation::ValidationError,
    };

    use crate::{
        errors::ErrorResponse,
        test_helpers::{make_product, payload, products_service},
    };

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").post(handler))
    }

    fn widget() -> Value {
        json!({ "name": "Widget", "price": 9.99, "quantity": 10 })
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let expected = payload(widget());

        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(move |received| *received == expected)
            .return_once(|_| Ok(make_product(1)));

        products.expect_get_product().never();
        products.expect_list_products().never();
        products.expect_update_product().never();
        products.expect_delete_product().never();

        let mut res = TestClient::post("http://example.com/products")
            .json(&widget())
            .send(&make_service(products))
            .await;

        let body: ProductResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/products/1"));
        assert_eq!(body.id, 1);
        assert_eq!(body.name, "Widget");
        assert!((body.price - 9.99).abs() < f64::EPSILON);
        assert_eq!(body.quantity, 10);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_conflict_returns_409() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::AlreadyExists("Widget".to_string())));

        let mut res = TestClient::post("http://example.com/products")
            .json(&widget())
            .send(&make_service(products))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
        assert_eq!(body.error, "Product with name 'Widget' already exists.");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_validation_error_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ValidationError::InvalidQuantity.into()));

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Widget", "price": 1, "quantity": 1.5 }))
            .send(&make_service(products))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Quantity must be a non-negative integer");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_malformed_body_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/products")
            .raw_json("{\"name\": ")
            .send(&make_service(products))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Invalid JSON");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_empty_object_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({}))
            .send(&make_service(products))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Invalid JSON");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_missing_column_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::MissingRequiredData));

        let res = TestClient::post("http://example.com/products")
            .json(&widget())
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
