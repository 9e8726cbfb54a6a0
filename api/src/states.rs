use crate::{config::AppConfig, storage::KeyValueStore};
use std::sync::Arc;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// The store is injected once at startup; handlers only ever hold a
/// reference-counted handle to it, so there is no global client.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KeyValueStore>,
    pub users_table: Arc<str>,
    pub posts_table: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, config: &AppConfig) -> Self {
        Self {
            store,
            users_table: Arc::from(config.users_table.as_str()),
            posts_table: Arc::from(config.posts_table.as_str()),
        }
    }
}
