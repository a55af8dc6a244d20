//! PostgreSQL gateway over the `customer` table.

use super::CustomerRepository;
use crate::error::AppError;
use crate::model::{new_customer_id, Customer};
use crate::store::{qualified_table, CUSTOMER_TABLE};
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "id, first_name, last_name, date_of_birth, active";

#[derive(Clone)]
pub struct PgCustomerRepository {
    pool: PgPool,
    table: String,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        Self {
            pool,
            table: qualified_table(schema, CUSTOMER_TABLE),
        }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, self.table);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Customer>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn save(&self, customer: Customer) -> Result<Customer, AppError> {
        let id = customer
            .assigned_id()
            .map(str::to_string)
            .unwrap_or_else(new_customer_id);
        let sql = format!(
            "INSERT INTO {} ({cols}) VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (id) DO UPDATE SET \
             first_name = EXCLUDED.first_name, \
             last_name = EXCLUDED.last_name, \
             date_of_birth = EXCLUDED.date_of_birth, \
             active = EXCLUDED.active \
             RETURNING {cols}",
            self.table,
            cols = COLUMNS
        );
        tracing::debug!(sql = %sql, id = %id, "query");
        let row = sqlx::query_as::<_, Customer>(&sql)
            .bind(&id)
            .bind(&customer.first_name)
            .bind(&customer.last_name)
            .bind(customer.date_of_birth)
            .bind(customer.active)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, customer: &Customer) -> Result<(), AppError> {
        let Some(id) = customer.assigned_id() else {
            return Ok(());
        };
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
