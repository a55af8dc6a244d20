//! Shared application state and its construction from configuration.

use crate::config::{AppConfig, StorageBackend};
use crate::error::AppError;
use crate::repository::{CustomerRepository, InMemoryCustomerRepository, PgCustomerRepository};
use crate::seed::load_seed_file;
use crate::service::CustomerService;
use crate::store::{ensure_customer_table, ensure_database_exists};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub customers: CustomerService,
}

impl AppState {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        AppState {
            customers: CustomerService::new(repo),
        }
    }

    /// Connect the configured storage engine, bootstrap it and load seed fixtures.
    pub async fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let repo: Arc<dyn CustomerRepository> = match config.storage {
            StorageBackend::Postgres => {
                ensure_database_exists(&config.database_url).await?;
                let pool = sqlx::postgres::PgPoolOptions::new()
                    .max_connections(config.max_connections)
                    .connect(&config.database_url)
                    .await?;
                ensure_customer_table(&pool, &config.schema).await?;
                Arc::new(PgCustomerRepository::new(pool, &config.schema))
            }
            StorageBackend::Memory => {
                tracing::warn!("using in-memory storage; data is lost on restart");
                Arc::new(InMemoryCustomerRepository::new())
            }
        };
        if let Some(path) = &config.seed_path {
            load_seed_file(repo.as_ref(), path).await?;
        }
        Ok(AppState::new(repo))
    }
}
