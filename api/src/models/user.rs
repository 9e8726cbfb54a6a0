use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub login: String,
    pub password: String,
}

impl User {
    /// Build a user under a freshly generated id.
    pub fn new(name: String, login: String, password: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            login,
            password,
        }
    }
}
