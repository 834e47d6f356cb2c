//! Storage Configuration
//!
//! Slot names used in the key-value store and the built-in seed users.

use crate::domain::User;

/// Names of the storage slots the state is mirrored into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub current_user: String,
    pub users: String,
    pub tasks: String,
    pub id_counters: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            current_user: "currentUser".to_string(),
            users: "users".to_string(),
            tasks: "tasks".to_string(),
            id_counters: "idCounters".to_string(),
        }
    }
}

impl StorageKeys {
    /// Same slots, each prefixed with `prefix`
    pub fn with_prefix(prefix: &str) -> Self {
        let base = Self::default();
        Self {
            current_user: format!("{}{}", prefix, base.current_user),
            users: format!("{}{}", prefix, base.users),
            tasks: format!("{}{}", prefix, base.tasks),
            id_counters: format!("{}{}", prefix, base.id_counters),
        }
    }
}

/// Users available before anyone registers
pub fn seed_users() -> Vec<User> {
    vec![
        User::new("1", "田中太郎", "tanaka@example.com"),
        User::new("2", "佐藤花子", "sato@example.com"),
        User::new("3", "山田次郎", "yamada@example.com"),
    ]
}
