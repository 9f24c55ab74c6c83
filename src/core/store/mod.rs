//! Remote record store
//!
//! The pipeline only needs two operations from the store: list every row with
//! a field projection, and set one field on one row.

mod airtable;

pub use airtable::AirtableClient;

use crate::core::record::Record;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Capability set of the remote table
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// List all rows, projecting only `fields`
    async fn list_records(&self, fields: &[String]) -> Result<Vec<Record>>;

    /// Set `field` to `value` on the row `record_id`
    async fn update_field(&self, record_id: &str, field: &str, value: Value) -> Result<()>;
}
