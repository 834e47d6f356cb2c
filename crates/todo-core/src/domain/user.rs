//! User Entity

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A selectable identity. Users are never edited or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Entity for User {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }
}
