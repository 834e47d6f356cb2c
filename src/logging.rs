//! Console logging
//!
//! Installs the rolling logger with a sink that writes to the browser console.

use log::{Level, LevelFilter};
use rolling_logger::Sink;
use wasm_bindgen::JsValue;
use web_sys::console;

const APP_NAME: &str = "Kanban";
/// Lines kept in the logger's ring buffer
const BUFFER_LINES: usize = 200;

pub fn init() {
    let sink: Sink = Box::new(|level, line| {
        let msg = JsValue::from_str(line);
        match level {
            Level::Error => console::error_1(&msg),
            Level::Warn => console::warn_1(&msg),
            Level::Info => console::info_1(&msg),
            Level::Debug | Level::Trace => console::debug_1(&msg),
        }
    });

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = rolling_logger::init_logger(APP_NAME, level, BUFFER_LINES, Some(sink)) {
        console::warn_1(&format!("[LOG] logger already installed: {}", e).into());
    }
}
