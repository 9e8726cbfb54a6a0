use super::{Item, KEY_ATTRIBUTE, KeyValueStore, StoreError};
use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use std::sync::Arc;

type Table = DashMap<String, Item>;

/// In-process key-value store.
///
/// `DashMap` gives per-key locking, so every single-item call is atomic
/// while scans walk the shards one at a time.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<DashMap<String, Arc<Table>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table. Existing tables are left untouched.
    pub fn create_table(&self, name: &str) {
        self.tables.entry(name.to_string()).or_default();
    }

    pub fn with_tables<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let store = Self::new();
        for name in names {
            store.create_table(name);
        }
        store
    }

    fn table(&self, name: &str) -> Result<Arc<Table>, StoreError> {
        self.tables
            .get(name)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| StoreError::UnknownTable(name.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, table: &str, id: &str) -> Result<Option<Item>, StoreError> {
        let table = self.table(table)?;
        Ok(table.get(id).map(|entry| entry.value().clone()))
    }

    async fn put(&self, table: &str, item: Item) -> Result<(), StoreError> {
        let table = self.table(table)?;
        let id = item
            .get(KEY_ATTRIBUTE)
            .and_then(Value::as_str)
            .ok_or(StoreError::MissingKey)?
            .to_string();
        table.insert(id, item);
        Ok(())
    }

    async fn update_fields(&self, table: &str, id: &str, fields: Item) -> Result<(), StoreError> {
        let table = self.table(table)?;
        let mut entry = table.entry(id.to_string()).or_insert_with(|| {
            let mut item = Item::new();
            item.insert(KEY_ATTRIBUTE.to_string(), Value::String(id.to_string()));
            item
        });
        for (field, value) in fields {
            // The key attribute is immutable
            if field != KEY_ATTRIBUTE {
                entry.value_mut().insert(field, value);
            }
        }
        Ok(())
    }

    async fn delete(&self, table: &str, id: &str) -> Result<(), StoreError> {
        let table = self.table(table)?;
        table.remove(id);
        Ok(())
    }

    async fn scan_with_filter(
        &self,
        table: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Item>, StoreError> {
        let table = self.table(table)?;
        Ok(table
            .iter()
            .filter(|entry| entry.value().get(field).and_then(Value::as_str) == Some(value))
            .map(|entry| entry.value().clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: Value) -> Item {
        match value {
            Value::Object(map) => map,
            _ => panic!("test items must be objects"),
        }
    }

    #[tokio::test]
    async fn put_then_get_returns_item() {
        let store = MemoryStore::with_tables(["Things"]);
        store
            .put("Things", item(json!({"id": "a", "name": "first"})))
            .await
            .unwrap();

        let found = store.get("Things", "a").await.unwrap().unwrap();
        assert_eq!(found["name"], "first");
        assert!(store.get("Things", "b").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn put_without_key_is_rejected() {
        let store = MemoryStore::with_tables(["Things"]);
        let err = store
            .put("Things", item(json!({"name": "nameless"})))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::MissingKey));
    }

    #[tokio::test]
    async fn unknown_table_is_an_error() {
        let store = MemoryStore::new();
        let err = store.get("Missing", "a").await.unwrap_err();
        assert!(matches!(err, StoreError::UnknownTable(name) if name == "Missing"));
    }

    #[tokio::test]
    async fn update_fields_merges_into_existing_item() {
        let store = MemoryStore::with_tables(["Things"]);
        store
            .put("Things", item(json!({"id": "a", "name": "old", "kept": 1})))
            .await
            .unwrap();

        store
            .update_fields("Things", "a", item(json!({"name": "new", "id": "hijack"})))
            .await
            .unwrap();

        let found = store.get("Things", "a").await.unwrap().unwrap();
        assert_eq!(Value::Object(found), json!({"id": "a", "name": "new", "kept": 1}));
    }

    #[tokio::test]
    async fn update_fields_creates_absent_item() {
        let store = MemoryStore::with_tables(["Things"]);
        store
            .update_fields("Things", "ghost", item(json!({"name": "boo"})))
            .await
            .unwrap();

        let found = store.get("Things", "ghost").await.unwrap().unwrap();
        assert_eq!(Value::Object(found), json!({"id": "ghost", "name": "boo"}));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryStore::with_tables(["Things"]);
        store.put("Things", item(json!({"id": "a"}))).await.unwrap();

        store.delete("Things", "a").await.unwrap();
        store.delete("Things", "a").await.unwrap();
        assert!(store.get("Things", "a").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn scan_matches_string_equality_only() {
        let store = MemoryStore::with_tables(["Things"]);
        for (id, owner) in [("1", json!("u1")), ("2", json!("u2")), ("3", json!("u1"))] {
            store
                .put("Things", item(json!({"id": id, "owner": owner})))
                .await
                .unwrap();
        }
        store
            .put("Things", item(json!({"id": "4", "owner": 7})))
            .await
            .unwrap();
        store.put("Things", item(json!({"id": "5"}))).await.unwrap();

        let mut ids: Vec<String> = store
            .scan_with_filter("Things", "owner", "u1")
            .await
            .unwrap()
            .into_iter()
            .map(|item| item["id"].as_str().unwrap().to_string())
            .collect();
        ids.sort();
        assert_eq!(ids, ["1", "3"]);
    }

    #[tokio::test]
    async fn tables_are_independent() {
        let store = MemoryStore::with_tables(["A", "B"]);
        store.put("A", item(json!({"id": "x"}))).await.unwrap();
        assert!(store.get("B", "x").await.unwrap().is_none());
    }
}
