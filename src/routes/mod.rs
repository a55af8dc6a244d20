//! Router builders. `app` assembles every route with request tracing and a body size limit.

mod common;
mod customer;

pub use common::common_routes;
pub use customer::{customer_routes, CUSTOMERS_BASE_PATH};

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(customer_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
}
