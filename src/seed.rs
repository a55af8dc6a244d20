//! Startup fixtures: a JSON array of customers saved through the gateway.

use crate::error::{AppError, ConfigError};
use crate::model::Customer;
use crate::repository::CustomerRepository;
use std::path::Path;

/// Load customers from `path` and save each one. Ids in the file are kept, so
/// reloading the same file overwrites instead of duplicating. Returns the count saved.
pub async fn load_seed_file(repo: &dyn CustomerRepository, path: &Path) -> Result<usize, AppError> {
    let seed_err = |reason: String| ConfigError::Seed {
        path: path.display().to_string(),
        reason,
    };
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| seed_err(e.to_string()))?;
    let customers: Vec<Customer> = serde_json::from_str(&raw).map_err(|e| seed_err(e.to_string()))?;
    let count = customers.len();
    for customer in customers {
        repo.save(customer).await?;
    }
    tracing::info!(path = %path.display(), count, "seeded customers");
    Ok(count)
}
