//! Board Views
//!
//! Per-user projections of the task list. Pure and recomputed on every read.

use super::task::{Bucket, Task};

/// All tasks owned by `user_id`, in collection order
pub fn tasks_for_user<'a>(tasks: &'a [Task], user_id: &'a str) -> impl Iterator<Item = &'a Task> + 'a {
    tasks.iter().filter(move |t| t.is_owned_by(user_id))
}

/// One user's tasks split into the two columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    pub pending: Vec<Task>,
    pub done: Vec<Task>,
}

impl Board {
    pub fn for_user(tasks: &[Task], user_id: &str) -> Self {
        let (done, pending) = tasks_for_user(tasks, user_id)
            .cloned()
            .partition(|t| t.completed);
        Self { pending, done }
    }

    pub fn column(&self, bucket: Bucket) -> &[Task] {
        match bucket {
            Bucket::Pending => &self.pending,
            Bucket::Done => &self.done,
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len() + self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
