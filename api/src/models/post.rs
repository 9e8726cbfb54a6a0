use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub content: String,
    pub user_id: String,
    pub date: DateTime<Utc>,
    pub last_update: DateTime<Utc>,
}

impl Post {
    /// Create a new post; `date` and `last_update` both start at `now`.
    pub fn new(content: String, user_id: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content,
            user_id,
            date: now,
            last_update: now,
        }
    }
}
