//! Customer record as stored in the `customer` table and exchanged as JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Assigned by the store on first save. Never part of a create request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// ISO-8601 calendar date (`YYYY-MM-DD`).
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub active: bool,
}

impl Customer {
    /// The id if one is set and non-empty. An empty string counts as unset.
    pub fn assigned_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|s| !s.is_empty())
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// New customer id: a random UUID rendered as 32 lowercase hex characters.
pub fn new_customer_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
