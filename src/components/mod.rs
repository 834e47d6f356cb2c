//! UI Components
//!
//! Leptos components for the login screen and the kanban board.

mod login_screen;
mod register_form;
mod board_page;
mod new_task_form;
mod bucket_column;
mod task_card;
mod comment_thread;

pub use login_screen::LoginScreen;
pub use register_form::RegisterForm;
pub use board_page::BoardPage;
pub use new_task_form::NewTaskForm;
pub use bucket_column::BucketColumn;
pub use task_card::TaskCard;
pub use comment_thread::CommentThread;

use wasm_bindgen::JsCast;

/// Current value of the `<input>` or `<select>` that fired `ev`
fn target_value(ev: &web_sys::Event) -> String {
    let Some(target) = ev.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        input.value()
    } else if let Some(select) = target.dyn_ref::<web_sys::HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}
