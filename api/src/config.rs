use std::env;

pub const DEFAULT_USERS_TABLE: &str = "UsersTable";
pub const DEFAULT_POSTS_TABLE: &str = "PostsTable";

/// Application configuration, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub users_table: String,
    pub posts_table: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            users_table: DEFAULT_USERS_TABLE.to_string(),
            posts_table: DEFAULT_POSTS_TABLE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup, falling back to defaults for
    /// missing or unparseable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            users_table: lookup("USERS_TABLE").unwrap_or(defaults.users_table),
            posts_table: lookup("POSTS_TABLE").unwrap_or(defaults.posts_table),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn missing_values_use_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.addr(), "0.0.0.0:3000");
        assert_eq!(config.users_table, "UsersTable");
        assert_eq!(config.posts_table, "PostsTable");
    }

    #[test]
    fn values_override_defaults() {
        let vars: HashMap<&str, &str> = [
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("USERS_TABLE", "people"),
            ("POSTS_TABLE", "notes"),
        ]
        .into_iter()
        .collect();
        let config = AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.users_table, "people");
        assert_eq!(config.posts_table, "notes");
    }

    #[test]
    fn bad_port_falls_back() {
        let config = AppConfig::from_lookup(|key| (key == "PORT").then(|| "http".to_string()));
        assert_eq!(config.port, 3000);
    }
}
