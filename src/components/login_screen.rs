//! Login Screen
//!
//! Pick an existing user, or switch to the registration form.

use leptos::prelude::*;

use crate::components::{target_value, RegisterForm};
use crate::context::use_app_context;
use crate::store::store_users;

#[component]
pub fn LoginScreen() -> impl IntoView {
    let (registering, set_registering) = signal(false);

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Todo管理システム"</h1>
                <Show
                    when=move || registering.get()
                    fallback=move || view! {
                        <UserPicker on_register=Callback::new(move |_| set_registering.set(true)) />
                    }
                >
                    <RegisterForm on_back=Callback::new(move |_| set_registering.set(false)) />
                </Show>
            </div>
        </main>
    }
}

/// User dropdown with login button
#[component]
fn UserPicker(#[prop(into)] on_register: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let (selected, set_selected) = signal(String::new());

    let login = move |_: web_sys::MouseEvent| {
        if ctx.login(&selected.get_untracked()) {
            set_selected.set(String::new());
        }
    };

    view! {
        <div class="auth-form">
            <label for="user-select">"ユーザーを選択"</label>
            <select
                id="user-select"
                prop:value=move || selected.get()
                on:change=move |ev| set_selected.set(target_value(&ev))
            >
                <option value="">"ユーザーを選択してください"</option>
                <For
                    each=move || store_users(&ctx.store)
                    key=|user| (user.id.clone(), user.name.clone())
                    children=move |user| view! {
                        <option value=user.id.clone()>{user.name.clone()}</option>
                    }
                />
            </select>

            <button
                class="primary-btn"
                disabled=move || selected.get().is_empty()
                on:click=login
            >
                "ログイン"
            </button>

            <button class="link-btn" on:click=move |_| on_register.run(())>
                "新規登録はこちら"
            </button>
        </div>
    }
}
