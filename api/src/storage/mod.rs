use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

mod memory;

pub use memory::MemoryStore;

/// A single record as stored in a table: an attribute map keyed by `id`.
pub type Item = Map<String, Value>;

/// Name of the key attribute every item carries.
pub const KEY_ATTRIBUTE: &str = "id";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Requested resource not found: table {0} does not exist")]
    UnknownTable(String),

    #[error("Item is missing its key attribute 'id'")]
    MissingKey,

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Key-value table operations.
///
/// Single-item operations are atomic. `scan_with_filter` and any sequence of
/// calls are not: concurrent writers may be observed half-way.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, table: &str, id: &str) -> Result<Option<Item>, StoreError>;

    /// Store `item` under its `id` attribute, replacing any previous item.
    async fn put(&self, table: &str, item: Item) -> Result<(), StoreError>;

    /// Set each attribute in `fields` on the item at `id`.
    ///
    /// An absent item is created holding only its key and `fields`.
    async fn update_fields(&self, table: &str, id: &str, fields: Item) -> Result<(), StoreError>;

    /// Remove the item at `id`. Removing an absent item is not an error.
    async fn delete(&self, table: &str, id: &str) -> Result<(), StoreError>;

    /// Full scan returning every item whose `field` equals the string `value`.
    async fn scan_with_filter(
        &self,
        table: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Item>, StoreError>;
}
