//! In-memory gateway used for tests and `STORAGE=memory`.

use super::CustomerRepository;
use crate::error::AppError;
use crate::model::{new_customer_id, Customer};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryCustomerRepository {
    rows: RwLock<HashMap<String, Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, AppError> {
        Ok(self.rows.read().await.get(id).cloned())
    }

    async fn save(&self, customer: Customer) -> Result<Customer, AppError> {
        let id = customer
            .assigned_id()
            .map(str::to_string)
            .unwrap_or_else(new_customer_id);
        let stored = customer.with_id(id.clone());
        self.rows.write().await.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, customer: &Customer) -> Result<(), AppError> {
        if let Some(id) = customer.assigned_id() {
            self.rows.write().await.remove(id);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
