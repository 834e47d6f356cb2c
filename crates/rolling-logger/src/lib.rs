//! Rolling Logger
//!
//! `log` backend that formats each record with a local timestamp, keeps the
//! newest lines in a fixed-size circular buffer and forwards every line to a
//! sink (the browser console in the web app, stderr by default).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Receives every formatted line
pub type Sink = Box<dyn Fn(Level, &str) + Send + Sync>;

pub struct RollingLogger {
    app_name: String,
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
    sink: Sink,
}

impl RollingLogger {
    pub fn new(app_name: impl Into<String>, level: LevelFilter, capacity: usize, sink: Sink) -> Self {
        Self {
            app_name: app_name.into(),
            level,
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
            sink,
        }
    }

    /// Logger that writes to stderr
    pub fn stderr(app_name: impl Into<String>, level: LevelFilter, capacity: usize) -> Self {
        Self::new(app_name, level, capacity, Box::new(|_, line| eprintln!("{}", line)))
    }

    pub fn format_line(&self, record: &Record) -> String {
        format!(
            "[{}] {:<5} {} {}: {}",
            Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            self.app_name,
            record.target(),
            record.args()
        )
    }

    /// Buffered lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format_line(record);
        (self.sink)(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the global logger. Fails if a logger is already set.
pub fn init_logger(
    app_name: &str,
    level: LevelFilter,
    capacity: usize,
    sink: Option<Sink>,
) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| match sink {
        Some(sink) => RollingLogger::new(app_name, level, capacity, sink),
        None => RollingLogger::stderr(app_name, level, capacity),
    });
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}
