//! Board Page
//!
//! Welcome header, new-task form and the two columns.

use leptos::prelude::*;
use todo_core::Bucket;

use crate::components::{BucketColumn, NewTaskForm};
use crate::context::use_app_context;
use crate::store::store_current_user;

#[component]
pub fn BoardPage() -> impl IntoView {
    let ctx = use_app_context();
    let user_name = move || store_current_user(&ctx.store).map(|u| u.name).unwrap_or_default();

    view! {
        <main class="board-page">
            <header class="board-header">
                <h1>"ようこそ、" {user_name} "さん"</h1>
                <button class="outline-btn" on:click=move |_| ctx.logout()>"ログアウト"</button>
            </header>

            <h2 class="board-title">"Todo管理 - カンバンボード"</h2>

            <NewTaskForm />

            <div class="columns">
                <BucketColumn bucket=Bucket::Pending />
                <BucketColumn bucket=Bucket::Done />
            </div>
        </main>
    }
}
