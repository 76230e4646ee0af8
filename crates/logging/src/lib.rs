use chrono::Local;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

// Keep at most this many lines in memory
pub const MAX_LOG_LINES: usize = 1000;

static LOGS: Lazy<Mutex<Vec<(LogLevel, String)>>> = Lazy::new(|| Mutex::new(Vec::new()));

static LOG_LEVEL: Lazy<Mutex<LogLevel>> = Lazy::new(|| Mutex::new(LogLevel::Warning));

// Cleared while the TUI owns the terminal
static CONSOLE_OUTPUT: AtomicBool = AtomicBool::new(true);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Debug => "🔍",
            LogLevel::Info => "ℹ️",
            LogLevel::Warning => "⚠️",
            LogLevel::Error => "❌",
        }
    }
}

pub fn set_log_level(level: LogLevel) {
    if let Ok(mut current_level) = LOG_LEVEL.lock() {
        *current_level = level;
    }
}

pub fn get_log_level() -> LogLevel {
    if let Ok(level) = LOG_LEVEL.lock() {
        *level
    } else {
        LogLevel::Warning
    }
}

/// Enable or disable echoing log lines to stdout/stderr.
///
/// Lines are still recorded in memory either way.
pub fn set_console_output(enabled: bool) {
    CONSOLE_OUTPUT.store(enabled, Ordering::SeqCst);
}

// Log a message with timestamp and level
pub fn log(level: LogLevel, message: &str) {
    let timestamp = Local::now().format("%H:%M:%S").to_string();
    let formatted = format!("[{}] {} {}", timestamp, level.prefix(), message);

    if let Ok(mut logs) = LOGS.lock() {
        logs.push((level, formatted.clone()));
        if logs.len() > MAX_LOG_LINES {
            let excess = logs.len() - MAX_LOG_LINES;
            logs.drain(..excess);
        }
    }

    if !CONSOLE_OUTPUT.load(Ordering::SeqCst) {
        return;
    }

    if level >= get_log_level() {
        match level {
            LogLevel::Error | LogLevel::Warning => eprintln!("{}", formatted),
            _ => println!("{}", formatted),
        }
    }
}

pub fn get_logs() -> Vec<String> {
    if let Ok(logs) = LOGS.lock() {
        logs.iter().map(|(_, line)| line.clone()).collect()
    } else {
        let timestamp = Local::now().format("%H:%M:%S").to_string();
        vec![format!("[{}] ❌ Error accessing logs", timestamp)]
    }
}

/// Most recent log line, if any
pub fn last_log() -> Option<String> {
    last_log_at(LogLevel::Debug)
}

/// Most recent log line at `level` or above
pub fn last_log_at(level: LogLevel) -> Option<String> {
    LOGS.lock().ok().and_then(|logs| {
        logs.iter()
            .rev()
            .find(|(entry_level, _)| *entry_level >= level)
            .map(|(_, line)| line.clone())
    })
}

pub fn clear_logs() {
    if let Ok(mut logs) = LOGS.lock() {
        logs.clear();
    }
}

pub fn debug(message: &str) {
    log(LogLevel::Debug, message);
}

pub fn info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn warning(message: &str) {
    log(LogLevel::Warning, message);
}

pub fn error(message: &str) {
    log(LogLevel::Error, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    // The log buffer is global, so everything touching it lives in one test
    #[test]
    fn test_log_buffer() {
        set_console_output(false);
        clear_logs();

        info("first message");
        warning("second message");

        let logs = get_logs();
        assert_eq!(logs.len(), 2);
        assert!(logs[0].ends_with("ℹ️ first message"));
        assert!(logs[0].starts_with('['));
        assert!(logs[1].contains("⚠️ second message"));
        assert_eq!(last_log().as_deref(), Some(logs[1].as_str()));

        debug("third message");
        assert!(last_log().unwrap().ends_with("third message"));
        assert_eq!(last_log_at(LogLevel::Warning).as_deref(), Some(logs[1].as_str()));
        assert!(last_log_at(LogLevel::Error).is_none());

        for i in 0..(MAX_LOG_LINES + 5) {
            debug(&format!("line {}", i));
        }
        let logs = get_logs();
        assert_eq!(logs.len(), MAX_LOG_LINES);
        assert!(logs[MAX_LOG_LINES - 1].ends_with(&format!("line {}", MAX_LOG_LINES + 4)));

        clear_logs();
        assert!(get_logs().is_empty());
        assert!(last_log().is_none());
        assert!(last_log_at(LogLevel::Debug).is_none());
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }
}
