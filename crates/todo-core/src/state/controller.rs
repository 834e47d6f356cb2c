//! State Controller
//!
//! Owns the single `TodoState` of a session. Every intent from the view goes
//! through one of these methods; after a successful mutation each registered
//! observer is told which part of the state changed.

use crate::domain::{Bucket, Comment, DomainResult, Task, User};
use super::clock::{Clock, LocalClock};
use super::todo_state::TodoState;

/// Part of the state touched by a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateChange {
    CurrentUser,
    Users,
    /// Task collection, including nested comments
    Tasks,
}

/// Receives a notification after each successful mutation
pub trait StateObserver {
    fn state_changed(&mut self, change: StateChange, state: &TodoState);
}

impl<F> StateObserver for F
where
    F: FnMut(StateChange, &TodoState),
{
    fn state_changed(&mut self, change: StateChange, state: &TodoState) {
        self(change, state)
    }
}

pub struct TodoController {
    state: TodoState,
    clock: Box<dyn Clock>,
    observers: Vec<Box<dyn StateObserver>>,
}

impl TodoController {
    pub fn new(state: TodoState) -> Self {
        Self::with_clock(state, LocalClock)
    }

    pub fn with_clock(state: TodoState, clock: impl Clock + 'static) -> Self {
        Self {
            state,
            clock: Box::new(clock),
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn add_task(&mut self, text: &str) -> DomainResult<Task> {
        let task = self.state.add_task(text)?;
        log::info!("added task {} for user {}", task.id, task.user_id);
        self.notify(&[StateChange::Tasks]);
        Ok(task)
    }

    pub fn toggle_task(&mut self, id: u32) -> DomainResult<Task> {
        let task = self.state.toggle_task(id)?;
        log::debug!("task {} is now {}", id, task.bucket());
        self.notify(&[StateChange::Tasks]);
        Ok(task)
    }

    pub fn delete_task(&mut self, id: u32) -> DomainResult<Task> {
        let task = self.state.delete_task(id)?;
        log::info!("deleted task {}", id);
        self.notify(&[StateChange::Tasks]);
        Ok(task)
    }

    /// Drop a task onto a column
    pub fn move_task(&mut self, id: u32, target: Bucket) -> DomainResult<Task> {
        let task = self.state.move_task(id, target)?;
        log::debug!("moved task {} to {}", id, target);
        self.notify(&[StateChange::Tasks]);
        Ok(task)
    }

    pub fn add_comment(&mut self, task_id: u32, text: &str) -> DomainResult<Comment> {
        let comment = self.state.add_comment(task_id, text, self.clock.as_ref())?;
        log::info!("added comment {} to task {}", comment.id, task_id);
        self.notify(&[StateChange::Tasks]);
        Ok(comment)
    }

    pub fn register_user(&mut self, name: &str, email: &str) -> DomainResult<User> {
        let user = self.state.register_user(name, email)?;
        log::info!("registered user {}", user.id);
        self.notify(&[StateChange::Users, StateChange::CurrentUser]);
        Ok(user)
    }

    pub fn login(&mut self, user_id: &str) -> DomainResult<User> {
        let user = self.state.login(user_id)?;
        log::info!("user {} logged in", user.id);
        self.notify(&[StateChange::CurrentUser]);
        Ok(user)
    }

    pub fn logout(&mut self) -> Option<User> {
        let user = self.state.logout()?;
        log::info!("user {} logged out", user.id);
        self.notify(&[StateChange::CurrentUser]);
        Some(user)
    }

    fn notify(&mut self, changes: &[StateChange]) {
        for &change in changes {
            for observer in self.observers.iter_mut() {
                observer.state_changed(change, &self.state);
            }
        }
    }
}
