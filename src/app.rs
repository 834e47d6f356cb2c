//! Kanban Todo App
//!
//! Hydrates state from local storage, wires the controller to persistence
//! and the render store, and switches between login and board.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};
use reactive_stores::Store;
use todo_core::{Bucket, KeyValueStore, MemoryStore, PersistentStore, TodoController};

use crate::components::{BoardPage, LoginScreen};
use crate::context::AppContext;
use crate::storage::WebStorage;
use crate::store::{store_is_logged_in, AppState, StoreSync};

/// Controller hydrated from `persistent`, which then mirrors every change
fn hydrate_controller<K: KeyValueStore + 'static>(persistent: PersistentStore<K>) -> TodoController {
    let mut controller = TodoController::new(persistent.load());
    controller.subscribe(persistent);
    controller
}

fn open_controller() -> TodoController {
    match WebStorage::local() {
        Ok(storage) => hydrate_controller(PersistentStore::new(storage)),
        Err(e) => {
            log::warn!("{}; changes will not survive a reload", e);
            hydrate_controller(PersistentStore::new(MemoryStore::new()))
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let mut controller = open_controller();
    let store = Store::new(AppState::from_state(controller.state()));
    controller.subscribe(StoreSync::new(store));

    // Drag state lives as long as the app so the document listeners stay valid
    let dnd = create_dnd_signals::<Bucket>();
    let ctx = AppContext::new(controller, store, dnd);
    provide_context(ctx);

    bind_global_mouseup(dnd, move |task_id, bucket| {
        log::debug!("[DND] drop task {} on {}", task_id, bucket);
        ctx.move_task(task_id, bucket);
    });

    view! {
        <Show
            when=move || store_is_logged_in(&store)
            fallback=|| view! { <LoginScreen /> }
        >
            <BoardPage />
        </Show>
    }
}
