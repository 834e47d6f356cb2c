//! Comment timestamps.

use chrono::Local;

/// Locale-style display format for comment timestamps, e.g. `2024/5/3 14:05:09`
pub const DISPLAY_FORMAT: &str = "%Y/%-m/%-d %-H:%M:%S";

/// Source of the display timestamp stamped on new comments
pub trait Clock {
    fn now_display(&self) -> String;
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now_display(&self) -> String {
        Local::now().format(DISPLAY_FORMAT).to_string()
    }
}
