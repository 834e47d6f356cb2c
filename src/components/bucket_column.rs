//! Bucket Column Component
//!
//! One board column. The whole column is a drop target for dragged cards;
//! dropping is handled by the global mouseup binding in `App`.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_target_mouseenter};
use todo_core::Bucket;

use crate::components::TaskCard;
use crate::context::use_app_context;
use crate::store::store_board;

/// Heading and empty-state text
fn column_labels(bucket: Bucket) -> (&'static str, &'static str) {
    match bucket {
        Bucket::Pending => ("未完了", "未完了のタスクはありません"),
        Bucket::Done => ("完了済み", "完了したタスクはありません"),
    }
}

#[component]
pub fn BucketColumn(bucket: Bucket) -> impl IntoView {
    let ctx = use_app_context();
    let dnd = ctx.dnd;
    let (title, empty_text) = column_labels(bucket);

    let tasks = Memo::new(move |_| store_board(&ctx.store).column(bucket).to_vec());

    let on_mouseenter = make_on_target_mouseenter(dnd, bucket);
    let on_mouseleave = make_on_mouseleave(dnd);

    let column_class = move || {
        let mut c = format!("bucket-column {}", bucket.as_str());
        if dnd.any_dragging() { c.push_str(" droppable"); }
        if dnd.is_over(bucket) { c.push_str(" drop-target"); }
        c
    };

    view! {
        <section class=column_class on:mouseenter=on_mouseenter on:mouseleave=on_mouseleave>
            <div class="column-header">
                <h2><span class="column-dot"></span>{title}</h2>
                <span class="column-count">{move || tasks.get().len()}</span>
            </div>

            <div class="column-body">
                <Show
                    when=move || !tasks.get().is_empty()
                    fallback=move || view! { <p class="column-empty">{empty_text}</p> }
                >
                    <For
                        each=move || tasks.get()
                        // Cards take plain props, so every field that can change is part of the key
                        key=|task| (task.id, task.completed, task.text.clone(), task.comments.len())
                        children=move |task| view! { <TaskCard task=task /> }
                    />
                </Show>
            </div>
        </section>
    }
}
