//! Comment Thread Component
//!
//! Comments of one task, oldest first, with a draft input.

use leptos::prelude::*;
use todo_core::Comment;

use crate::components::target_value;
use crate::context::use_app_context;

#[component]
pub fn CommentThread(task_id: u32, comments: Vec<Comment>) -> impl IntoView {
    let ctx = use_app_context();
    let (draft, set_draft) = signal(String::new());

    let submit = move || {
        if ctx.add_comment(task_id, &draft.get_untracked()) {
            set_draft.set(String::new());
        }
    };
    let is_blank = move || draft.get().trim().is_empty();

    let list = if comments.is_empty() {
        view! { <p class="comment-empty">"コメントはありません"</p> }.into_any()
    } else {
        comments
            .into_iter()
            .map(|comment| view! {
                <div class="comment">
                    <div class="comment-meta">
                        <span class="comment-author">{comment.author_name}</span>
                        <span class="comment-time">{comment.created_at}</span>
                    </div>
                    <p class="comment-text">{comment.text}</p>
                </div>
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="comments">
            <h4>"コメント"</h4>
            <div class="comment-list">{list}</div>
            <div class="comment-input-row">
                <input
                    type="text"
                    placeholder="コメントを追加..."
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                />
                <button class="comment-btn" disabled=is_blank on:click=move |_| submit()>
                    "追加"
                </button>
            </div>
        </div>
    }
}
