//! Console Logger
//!
//! `log` backend for the browser: every record goes to the devtools console
//! at the matching severity and into a bounded in-memory history that can be
//! inspected later (e.g. attached to a bug report).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Lines kept in the history before the oldest ones are evicted
pub const DEFAULT_CAPACITY: usize = 200;

static INSTANCE: OnceLock<ConsoleLogger> = OnceLock::new();

/// Errors raised while installing the logger
#[derive(Debug)]
pub enum InitError {
    AlreadyInitialized,
    SetLogger(log::SetLoggerError),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::AlreadyInitialized => write!(f, "console logger already initialized"),
            InitError::SetLogger(e) => write!(f, "failed to install logger: {}", e),
        }
    }
}

impl std::error::Error for InitError {}

/// Logger writing to the console with a circular history buffer
pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    history: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            history: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Append a line, evicting the oldest one when full
    fn remember(&self, line: String) {
        if let Ok(mut history) = self.history.lock() {
            while history.len() >= self.capacity {
                history.pop_front();
            }
            history.push_back(line);
        }
    }

    /// Snapshot of the retained lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        self.history
            .lock()
            .map(|history| history.iter().cloned().collect())
            .unwrap_or_default()
    }
}

fn format_line(record: &Record) -> String {
    format!(
        "{} {:<5} {}: {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug => console::log_1(&value),
        Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        write_console(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

/// Install the logger as the global `log` backend
pub fn init(level: LevelFilter) -> Result<(), InitError> {
    INSTANCE
        .set(ConsoleLogger::new(level, DEFAULT_CAPACITY))
        .map_err(|_| InitError::AlreadyInitialized)?;
    let logger = INSTANCE.get().ok_or(InitError::AlreadyInitialized)?;
    log::set_logger(logger).map_err(InitError::SetLogger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recent lines from the global logger (empty before `init`)
pub fn recent() -> Vec<String> {
    INSTANCE.get().map(ConsoleLogger::recent).unwrap_or_default()
}
