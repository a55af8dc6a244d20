//! Create, read, replace and delete customers.
//!
//! Lookup-then-mutate in `update` and `delete` is not isolated here; atomicity against
//! concurrent writers on the same id is whatever the storage engine provides.

use crate::error::AppError;
use crate::model::Customer;
use crate::repository::CustomerRepository;
use std::sync::Arc;

pub const ID_IN_CREATE_REQUEST: &str = "ID should not be part of create request";

#[derive(Clone)]
pub struct CustomerService {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &Arc<dyn CustomerRepository> {
        &self.repo
    }

    /// Persist a new customer. Fails with `Validation` if the caller supplied an id.
    pub async fn add(&self, customer: Customer) -> Result<Customer, AppError> {
        if customer.assigned_id().is_some() {
            return Err(AppError::Validation(ID_IN_CREATE_REQUEST.into()));
        }
        let saved = self.repo.save(Customer { id: None, ..customer }).await?;
        tracing::info!(id = ?saved.id, "customer created");
        Ok(saved)
    }

    pub async fn get(&self, id: &str) -> Result<Customer, AppError> {
        tracing::debug!(id, "get customer");
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    /// Full replace of an existing customer. The id on `customer` selects the row.
    pub async fn update(&self, customer: Customer) -> Result<Customer, AppError> {
        let id = customer
            .assigned_id()
            .ok_or_else(|| AppError::NotFound(String::new()))?
            .to_string();
        tracing::debug!(id = %id, "update customer");
        self.get(&id).await?;
        self.repo.save(customer).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let existing = self.get(id).await?;
        self.repo.delete(&existing).await?;
        tracing::info!(id, "customer deleted");
        Ok(())
    }
}
