//! Comment Entity
//!
//! Comments live inside exactly one task and are append-only.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u32,
    pub text: String,
    pub author_name: String,
    pub author_id: String,
    /// Display-formatted local time captured when the comment was added
    pub created_at: String,
}

impl Entity for Comment {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }
}
