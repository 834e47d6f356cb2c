//! Registration Form
//!
//! Creates a user and logs them in straight away.

use leptos::prelude::*;

use crate::components::target_value;
use crate::context::use_app_context;

#[component]
pub fn RegisterForm(#[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());

    let incomplete = move || name.get().trim().is_empty() || email.get().trim().is_empty();

    let register = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.register_user(&name.get_untracked(), &email.get_untracked()) {
            set_name.set(String::new());
            set_email.set(String::new());
        }
    };

    view! {
        <form class="auth-form" on:submit=register>
            <h2>"新規登録"</h2>

            <label for="register-name">"名前"</label>
            <input
                id="register-name"
                type="text"
                placeholder="田中太郎"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(target_value(&ev))
            />

            <label for="register-email">"メールアドレス"</label>
            <input
                id="register-email"
                type="email"
                placeholder="tanaka@example.com"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(target_value(&ev))
            />

            <button type="submit" class="secondary-btn" disabled=incomplete>
                "登録"
            </button>

            <button type="button" class="link-btn muted" on:click=move |_| on_back.run(())>
                "ログインに戻る"
            </button>
        </form>
    }
}
