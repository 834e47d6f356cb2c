//! New Task Form Component
//!
//! Submits on Enter or the add button.

use leptos::prelude::*;

use crate::components::target_value;
use crate::context::use_app_context;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let (new_text, set_new_text) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Blank input stays in the box; only a created task clears it
        if ctx.add_task(&new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="新しいタスクを入力..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(target_value(&ev))
            />
            <button type="submit" class="primary-btn">"追加"</button>
        </form>
    }
}
