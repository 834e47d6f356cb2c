//! Application Context
//!
//! Shared handles provided via Leptos Context API. All user intents go
//! through `AppContext`, which forwards them to the single `TodoController`.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;
use todo_core::{Bucket, DomainResult, TodoController};

use crate::store::AppStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The controller is not `Send`; it lives in thread-local arena storage
    controller: StoredValue<TodoController, LocalStorage>,
    /// Render snapshot, refreshed after every mutation
    pub store: AppStore,
    /// Card drag state; drop targets are the two columns
    pub dnd: DndSignals<Bucket>,
}

impl AppContext {
    pub fn new(controller: TodoController, store: AppStore, dnd: DndSignals<Bucket>) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
            store,
            dnd,
        }
    }

    /// Run one intent. Rejected intents are no-ops for the UI.
    fn dispatch<T>(&self, intent: &str, f: impl FnOnce(&mut TodoController) -> DomainResult<T>) -> Option<T> {
        match self.controller.try_update_value(f) {
            Some(Ok(value)) => Some(value),
            Some(Err(e)) => {
                log::debug!("{} ignored: {}", intent, e);
                None
            }
            None => {
                log::error!("{} dropped: controller disposed", intent);
                None
            }
        }
    }

    pub fn add_task(&self, text: &str) -> bool {
        self.dispatch("add task", |c| c.add_task(text)).is_some()
    }

    pub fn toggle_task(&self, id: u32) {
        self.dispatch("toggle task", |c| c.toggle_task(id));
    }

    pub fn delete_task(&self, id: u32) {
        self.dispatch("delete task", |c| c.delete_task(id));
    }

    pub fn move_task(&self, id: u32, target: Bucket) {
        self.dispatch("move task", |c| c.move_task(id, target));
    }

    pub fn add_comment(&self, task_id: u32, text: &str) -> bool {
        self.dispatch("add comment", |c| c.add_comment(task_id, text)).is_some()
    }

    pub fn register_user(&self, name: &str, email: &str) -> bool {
        self.dispatch("register", |c| c.register_user(name, email)).is_some()
    }

    pub fn login(&self, user_id: &str) -> bool {
        self.dispatch("login", |c| c.login(user_id)).is_some()
    }

    pub fn logout(&self) {
        self.controller.update_value(|c| {
            c.logout();
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
