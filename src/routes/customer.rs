//! Customer CRUD routes under `/customers/v1`.

use crate::handlers::customer::{create, delete as delete_handler, read, update};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub const CUSTOMERS_BASE_PATH: &str = "/customers/v1";

pub fn customer_routes(state: AppState) -> Router {
    Router::new()
        .route(CUSTOMERS_BASE_PATH, post(create))
        .route(&format!("{}/", CUSTOMERS_BASE_PATH), post(create))
        .route(
            &format!("{}/:id", CUSTOMERS_BASE_PATH),
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
