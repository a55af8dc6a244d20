//! Persistence gateway for customers: find by id, save (insert or replace), delete.
//! The service only talks to [`CustomerRepository`], so the engine can be swapped.

mod memory;
mod postgres;

pub use memory::InMemoryCustomerRepository;
pub use postgres::PgCustomerRepository;

use crate::error::AppError;
use crate::model::Customer;
use async_trait::async_trait;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, AppError>;

    /// Insert when the id is new, overwrite every column when it exists.
    /// A customer without an id gets a generated one; the stored record is returned.
    async fn save(&self, customer: Customer) -> Result<Customer, AppError>;

    /// Remove the row with the customer's id. Unknown or unset ids are a no-op.
    async fn delete(&self, customer: &Customer) -> Result<(), AppError>;

    /// Cheap reachability check for readiness probes.
    async fn ping(&self) -> Result<(), AppError>;
}
