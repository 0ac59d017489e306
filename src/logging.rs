use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::OnceLock;

// Topics accepted by --debug-filter
pub const TOPICS: [&str; 3] = ["game", "input", "render"];

// Custom logger structure
#[derive(Debug)]
struct WordleLogger {
    level: LevelFilter,
    debug_filters: Option<HashSet<String>>,
}

impl log::Log for WordleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        // Debug/trace records are limited to the selected topics, if any
        match &self.debug_filters {
            Some(filters) if metadata.level() >= log::Level::Debug => {
                filters.contains(metadata.target())
                    || filters.iter().any(|f| metadata.target().starts_with(f.as_str()))
            }
            _ => true,
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stdout = io::stdout();
        // A closed stdout is not worth crashing the game over
        let _ = writeln!(stdout, "{}", format_record(record));
        let _ = stdout.flush();
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

fn format_record(record: &Record) -> String {
    let level_color = match record.level() {
        log::Level::Error => "\x1B[31m", // Red
        log::Level::Warn => "\x1B[33m",  // Yellow
        log::Level::Info => "\x1B[32m",  // Green
        log::Level::Debug => "\x1B[36m", // Cyan
        log::Level::Trace => "\x1B[35m", // Magenta
    };
    let reset = "\x1B[0m";
    let timestamp = Local::now().format("%H:%M:%S%.3f");

    let mut output = format!(
        "{timestamp} {level_color}{level:5}{reset} {target}: {message}",
        level = record.level(),
        target = record.target(),
        message = record.args()
    );

    // Add module path if available and different from target
    if let Some(module_path) = record.module_path() {
        if module_path != record.target() {
            output.push_str(&format!(" [{}]", module_path));
        }
    }
    output
}

fn parse_filters(filter_str: &str) -> HashSet<String> {
    filter_str
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

static LOGGER: OnceLock<WordleLogger> = OnceLock::new();

/// Install the logger with optional comma-separated debug topics.
/// Only the first call configures it; later calls fail with `SetLoggerError`.
pub fn init_logger(level: LevelFilter, debug_filter: Option<String>) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| WordleLogger {
        level,
        debug_filters: debug_filter.as_deref().map(parse_filters),
    });
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

// Helper macros for specific debug topics
#[macro_export]
macro_rules! debug_game {
    ($row:expr, $($arg:tt)*) => {
        log::debug!(target: "game", "[Row {}] {}", $row, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_input {
    ($($arg:tt)*) => {
        log::debug!(target: "input", "{}", format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_render {
    ($($arg:tt)*) => {
        log::debug!(target: "render", "{}", format_args!($($arg)*))
    };
}
