//! Factory Function
//!
//! A function that builds and returns another function at runtime. Here each
//! call to `create_logger` returns a closure bound to one log level.
//!
//! Run with: cargo run --bin creational_07_factory_function

use chrono::{Local, NaiveDateTime};

use design_patterns::colors::{paint, Palette};
use design_patterns::logger::TIMESTAMP_FORMAT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn prefix(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    fn palette(self) -> Palette {
        match self {
            LogLevel::Info => Palette::Gray,
            LogLevel::Warn => Palette::Orange,
            LogLevel::Error => Palette::Red,
        }
    }
}

fn format_entry(level: LogLevel, timestamp: NaiveDateTime, message: &str) -> String {
    format!(
        "[{}: {}] {}",
        level.prefix(),
        timestamp.format(TIMESTAMP_FORMAT),
        message
    )
}

fn create_logger(level: LogLevel) -> impl Fn(&str) {
    move |message: &str| {
        let entry = format_entry(level, Local::now().naive_local(), message);
        println!("{}", paint(entry, level.palette()));
    }
}

fn main() {
    let info_logger = create_logger(LogLevel::Info);
    let warn_logger = create_logger(LogLevel::Warn);
    let error_logger = create_logger(LogLevel::Error);

    info_logger("Application started correctly.");
    warn_logger("Memory usage is high.");
    error_logger("Database connection error.");
}
