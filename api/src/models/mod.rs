mod post;
mod user;

pub use post::Post;
pub use user::User;

use crate::storage::{Item, StoreError};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Serialize a record into the attribute map the store keeps.
pub fn to_item<T: Serialize>(record: &T) -> Result<Item, StoreError> {
    match serde_json::to_value(record) {
        Ok(Value::Object(item)) => Ok(item),
        Ok(other) => Err(StoreError::Backend(format!(
            "record serialized to {other}, expected an object"
        ))),
        Err(e) => Err(StoreError::Backend(e.to_string())),
    }
}

/// Decode a stored item. A malformed item is reported as a backend failure.
pub fn from_item<T: DeserializeOwned>(item: Item) -> Result<T, StoreError> {
    serde_json::from_value(Value::Object(item)).map_err(|e| StoreError::Backend(e.to_string()))
}
