//! File logging for GameShelf
//!
//! The terminal belongs to the TUI while it runs, so log lines go to a file
//! only. Until [`init`] is called every helper is a no-op.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::SystemTime;

/// Global logger instance
static LOGGER: OnceLock<Mutex<GameShelfLogger>> = OnceLock::new();

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        f.pad(label)
    }
}

/// Main logger struct
pub struct GameShelfLogger {
    file: Option<File>,
    min_level: LogLevel,
}

impl GameShelfLogger {
    fn new(path: &Path, min_level: LogLevel) -> Self {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true) // Start fresh each run
            .open(path)
            .ok();

        Self { file, min_level }
    }

    /// Default log file path (same directory as executable)
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gameshelf.log")
    }

    fn log(&mut self, level: LogLevel, module: &str, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);

        let entry = format_entry(timestamp, level, module, message);

        if let Some(ref mut file) = self.file {
            let _ = file.write_all(entry.as_bytes());
            let _ = file.flush();
        }
    }
}

fn format_entry(timestamp: u128, level: LogLevel, module: &str, message: &str) -> String {
    format!("[{:013}] [{:5}] [{}] {}\n", timestamp, level, module, message)
}

/// Initialize the global logger. Returns false if the file could not be opened
/// or a logger was already installed.
pub fn init(path: &Path, min_level: LogLevel) -> bool {
    let logger = GameShelfLogger::new(path, min_level);
    if logger.file.is_none() {
        return false;
    }
    LOGGER.set(Mutex::new(logger)).is_ok()
}

fn log(level: LogLevel, module: &str, message: &str) {
    if let Some(logger) = LOGGER.get() {
        if let Ok(mut l) = logger.lock() {
            l.log(level, module, message);
        }
    }
}

pub fn debug(module: &str, message: &str) {
    log(LogLevel::Debug, module, message);
}

pub fn info(module: &str, message: &str) {
    log(LogLevel::Info, module, message);
}

pub fn warn(module: &str, message: &str) {
    log(LogLevel::Warn, module, message);
}

pub fn error(module: &str, message: &str) {
    log(LogLevel::Error, module, message);
}

/// Record one screen transition
pub fn log_transition(action: &str, filter_text: &str, visible_before: usize, visible_after: usize) {
    let msg = format!(
        "{}: filter='{}', visible {} -> {}",
        action, filter_text, visible_before, visible_after
    );
    debug("SCREEN", &msg);
}

/// Write a separator line for readability
pub fn separator(label: &str) {
    let msg = format!("========== {} ==========", label);
    info("---", &msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_layout() {
        let line = format_entry(42, LogLevel::Warn, "SCREEN", "hello");
        assert_eq!(line, "[0000000000042] [WARN ] [SCREEN] hello\n");
    }

    #[test]
    fn levels_below_minimum_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.log");
        let mut logger = GameShelfLogger::new(&path, LogLevel::Info);

        logger.log(LogLevel::Debug, "T", "hidden");
        logger.log(LogLevel::Error, "T", "shown");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("hidden"));
        assert!(contents.contains("[ERROR] [T] shown"));
    }

    #[test]
    fn helpers_are_noops_without_init() {
        // Must not panic even though nothing was initialised in this test
        info("T", "nothing to see");
        log_transition("Search", "x", 1, 0);
    }
}
