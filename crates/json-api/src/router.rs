//! App Router

use std::sync::Arc;

use salvo::{
    affix_state::inject,
    cors::{AllowHeaders, AllowOrigin, Cors},
    http::Method,
    prelude::*,
    trailing_slash::remove_slash,
};

use crate::{analysis, healthcheck, home, observability, products, sales, state::State};

/// Resource routes, without middleware.
pub(crate) fn app_router() -> Router {
    Router::new()
        .get(home::handler)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("sales")
                .get(sales::index::handler)
                .push(Router::with_path("{id}").get(sales::get::handler)),
        )
        .push(Router::with_path("genai-analyze").post(analysis::analyze::handler))
}

/// Full service with CORS, request logging, panic catching and state injection.
pub(crate) fn app_service(state: Arc<State>) -> Service {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(app_router());

    Service::new(router)
        .hoop(cors())
        .hoop(observability::request_logging)
}

fn cors() -> impl Handler {
    Cors::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::any())
        .into_handler()
}
