//! Customer service: REST CRUD over customer records stored in PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod openapi;
pub mod repository;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AppConfig, LogFormat, StorageBackend};
pub use error::{AppError, ConfigError};
pub use logging::init_logging;
pub use model::{new_customer_id, Customer};
pub use repository::{CustomerRepository, InMemoryCustomerRepository, PgCustomerRepository};
pub use routes::{app, common_routes, customer_routes, CUSTOMERS_BASE_PATH};
pub use seed::load_seed_file;
pub use service::CustomerService;
pub use state::AppState;
pub use store::{ensure_customer_table, ensure_database_exists};
