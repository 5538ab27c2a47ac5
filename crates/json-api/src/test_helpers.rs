//! Test helpers.

use std::sync::Arc;

use jiff::{Timestamp, civil::date};
use salvo::{affix_state::inject, prelude::*};
use serde_json::Value;

use stockroom_app::{
    analysis::MockAnalysisService,
    context::AppContext,
    domain::{
        products::{
            MockProductsService,
            data::ProductPayload,
            records::{ProductId, ProductRecord},
        },
        sales::{
            MockSalesService,
            records::{SalesRecord, SalesRecordId},
        },
    },
};

use crate::state::State;

pub(crate) fn make_product(id: i64) -> ProductRecord {
    ProductRecord {
        id: ProductId::from_i64(id),
        name: "Widget".to_string(),
        description: None,
        price: 9.99,
        quantity: 10,
        created_at: Some(Timestamp::UNIX_EPOCH),
        updated_at: Some(Timestamp::UNIX_EPOCH),
    }
}

pub(crate) fn make_sale(id: i64) -> SalesRecord {
    SalesRecord {
        id: SalesRecordId::from_i64(id),
        product_name: "Widget".to_string(),
        sales_date: date(2024, 3, 1),
        quantity_sold: 3,
        total_revenue: 29.97,
    }
}

pub(crate) fn payload(body: Value) -> ProductPayload {
    ProductPayload::from_json(body).expect("test payload should be well formed")
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

fn strict_sales_mock() -> MockSalesService {
    let mut sales = MockSalesService::new();

    sales.expect_list_sales().never();
    sales.expect_get_sale().never();
    sales.expect_import_sales().never();

    sales
}

fn strict_analysis_mock() -> MockAnalysisService {
    let mut analysis = MockAnalysisService::new();

    analysis.expect_analyze().never();

    analysis
}

fn state(
    products: MockProductsService,
    sales: MockSalesService,
    analysis: MockAnalysisService,
) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
        sales: Arc::new(sales),
        analysis: Arc::new(analysis),
    })
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    state(products, strict_sales_mock(), strict_analysis_mock())
}

fn service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service(state_with_products(products), route)
}

pub(crate) fn sales_service(sales: MockSalesService, route: Router) -> Service {
    service(
        state(strict_products_mock(), sales, strict_analysis_mock()),
        route,
    )
}

pub(crate) fn analysis_service(analysis: MockAnalysisService, route: Router) -> Service {
    service(
        state(strict_products_mock(), strict_sales_mock(), analysis),
        route,
    )
}

pub(crate) fn analysis_service_with_limit(
    analysis: MockAnalysisService,
    bytes: usize,
    route: Router,
) -> Service {
    let state = Arc::unwrap_or_clone(state(strict_products_mock(), strict_sales_mock(), analysis));

    service(Arc::new(state.with_analysis_body_limit(bytes)), route)
}
