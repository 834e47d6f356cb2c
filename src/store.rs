//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is a
//! read-only snapshot for rendering; it is refreshed from the controller by
//! `StoreSync` after every mutation.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{Board, StateChange, StateObserver, Task, TodoState, User};

/// Render snapshot with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Logged-in user (None = login screen)
    pub current_user: Option<User>,
    /// Everyone selectable on the login screen
    pub users: Vec<User>,
    /// Tasks of all users
    pub tasks: Vec<Task>,
}

impl AppState {
    pub fn from_state(state: &TodoState) -> Self {
        Self {
            current_user: state.current_user().cloned(),
            users: state.users().to_vec(),
            tasks: state.tasks().to_vec(),
        }
    }

    /// Columns of the logged-in user; empty when logged out
    pub fn board(&self) -> Board {
        board_of(self.current_user.as_ref(), &self.tasks)
    }
}

fn board_of(user: Option<&User>, tasks: &[Task]) -> Board {
    user.map(|u| Board::for_user(tasks, &u.id)).unwrap_or_default()
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Copies the changed part of the controller state into the store
pub struct StoreSync {
    store: AppStore,
}

impl StoreSync {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }
}

impl StateObserver for StoreSync {
    fn state_changed(&mut self, change: StateChange, state: &TodoState) {
        match change {
            StateChange::CurrentUser => *self.store.current_user().write() = state.current_user().cloned(),
            StateChange::Users => *self.store.users().write() = state.users().to_vec(),
            StateChange::Tasks => *self.store.tasks().write() = state.tasks().to_vec(),
        }
    }
}

// ========================
// Store Helper Functions
// ========================

pub fn store_current_user(store: &AppStore) -> Option<User> {
    store.current_user().get()
}

pub fn store_is_logged_in(store: &AppStore) -> bool {
    store.current_user().with(|u| u.is_some())
}

pub fn store_users(store: &AppStore) -> Vec<User> {
    store.users().get()
}

/// Board of the logged-in user, tracking only the user and task fields
pub fn store_board(store: &AppStore) -> Board {
    let tasks = store.tasks();
    store
        .current_user()
        .with(|user| tasks.with(|tasks| board_of(user.as_ref(), tasks)))
}
