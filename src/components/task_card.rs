//! Task Card Component
//!
//! A draggable card: checkbox, text, delete button and the comment thread.

use leptos::prelude::*;
use leptos_dragdrop::make_on_mousedown;
use todo_core::Task;

use crate::components::CommentThread;
use crate::context::use_app_context;

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let dnd = ctx.dnd;

    let id = task.id;
    let completed = task.completed;
    let on_mousedown = make_on_mousedown(dnd, id);

    let card_class = move || if dnd.is_dragging(id) { "task-card dragging" } else { "task-card" };
    let text_class = if completed { "task-text completed" } else { "task-text" };

    view! {
        <article class=card_class on:mousedown=on_mousedown>
            <div class="task-header">
                <input
                    type="checkbox"
                    checked=completed
                    on:change=move |_| ctx.toggle_task(id)
                />
                <span class=text_class>
                    {task.text}
                </span>
                <button class="delete-btn" title="タスクを削除" on:click=move |_| ctx.delete_task(id)>
                    "×"
                </button>
            </div>

            <CommentThread task_id=id comments=task.comments />
        </article>
    }
}
