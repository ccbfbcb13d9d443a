//! Console Logger
//!
//! `log` backend for the browser: records go to `console.*` and the most
//! recent lines are kept in a bounded buffer.

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;

/// Lines retained by the rolling buffer
const BUFFER_CAPACITY: usize = 200;

static LOGGER: ConsoleLogger = ConsoleLogger::new();

/// Fixed-capacity line buffer, oldest lines dropped first
#[derive(Debug)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub const fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        while self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

pub struct ConsoleLogger {
    buffer: Mutex<LogBuffer>,
}

impl ConsoleLogger {
    const fn new() -> Self {
        Self {
            buffer: Mutex::new(LogBuffer::new(BUFFER_CAPACITY)),
        }
    }
}

/// `[LEVEL target] message`
fn format_record(record: &Record) -> String {
    format!("[{} {}] {}", record.level(), record.target(), record.args())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        let js_line = JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&js_line),
            Level::Warn => web_sys::console::warn_1(&js_line),
            Level::Info => web_sys::console::info_1(&js_line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&js_line),
        }
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

/// Install the console logger; fails if a logger is already set
pub fn init(level: LevelFilter) -> Result<(), String> {
    log::set_logger(&LOGGER).map_err(|e| e.to_string())?;
    log::set_max_level(level);
    Ok(())
}

/// Most recent log lines, oldest first
pub fn recent_lines() -> Vec<String> {
    LOGGER.buffer.lock().map(|buffer| buffer.lines()).unwrap_or_default()
}

/// Exported so the buffer can be dumped from the devtools console
#[wasm_bindgen]
pub fn recent_logs() -> String {
    recent_lines().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_drops_oldest() {
        let mut buffer = LogBuffer::new(3);
        for i in 0..5 {
            buffer.push(format!("line {}", i));
        }
        assert_eq!(buffer.lines(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut buffer = LogBuffer::new(0);
        buffer.push("ignored".to_string());
        assert!(buffer.lines().is_empty());
    }

    #[test]
    fn test_format_record() {
        let line = format_record(
            &Record::builder()
                .args(format_args!("added item"))
                .level(Level::Debug)
                .target("alisveris_listesi::store")
                .build(),
        );
        assert_eq!(line, "[DEBUG alisveris_listesi::store] added item");
    }
}
