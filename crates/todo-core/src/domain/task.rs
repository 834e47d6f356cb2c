//! Task Entity
//!
//! A task belongs to one user and carries its own comment thread.

use std::fmt;

use serde::{Deserialize, Serialize};
use super::comment::Comment;
use super::entity::Entity;

/// The two columns of the board, decided solely by `Task::completed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Pending,
    Done,
}

impl Bucket {
    pub fn from_completed(completed: bool) -> Self {
        if completed { Bucket::Done } else { Bucket::Pending }
    }

    pub fn is_completed(self) -> bool {
        matches!(self, Bucket::Done)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Bucket::Pending => "pending",
            Bucket::Done => "done",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub text: String,
    pub completed: bool,
    /// Owner; the task is only visible to this user
    pub user_id: String,
    /// Insertion-ordered, never reordered
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Task {
    /// Create a new pending task with no comments
    pub fn new(id: u32, text: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            user_id: user_id.into(),
            comments: Vec::new(),
        }
    }

    pub fn bucket(&self) -> Bucket {
        Bucket::from_completed(self.completed)
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

impl Entity for Task {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }
}
