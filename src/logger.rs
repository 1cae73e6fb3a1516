//! Console backend for the `log` facade.
//!
//! Every record becomes one line: `[LEVEL: YYYY-MM-DD HH:MM:SS] target: message`,
//! colored by level.

use chrono::{Local, NaiveDateTime};
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::colors::{paint, Palette};
use crate::error::PatternError;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        ConsoleLogger { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            record.level(),
            Local::now().naive_local(),
            record.target(),
            &record.args().to_string(),
        );
        let line = paint(line, level_palette(record.level()));
        if record.level() <= Level::Warn {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }

    fn flush(&self) {}
}

pub fn level_palette(level: Level) -> Palette {
    match level {
        Level::Error => Palette::Red,
        Level::Warn => Palette::Orange,
        Level::Info => Palette::Green,
        Level::Debug => Palette::Cyan,
        Level::Trace => Palette::Gray,
    }
}

pub fn format_line(level: Level, timestamp: NaiveDateTime, target: &str, message: &str) -> String {
    format!(
        "[{}: {}] {}: {}",
        level,
        timestamp.format(TIMESTAMP_FORMAT),
        target,
        message
    )
}

/// Installs [`ConsoleLogger`] as the global logger. Only the first call succeeds.
pub fn init(level: LevelFilter) -> Result<(), PatternError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 21)
            .unwrap()
            .and_hms_opt(7, 5, 9)
            .unwrap()
    }

    #[test]
    fn test_format_line() {
        let line = format_line(Level::Warn, timestamp(), "adapter", "Memory usage is high.");
        assert_eq!(line, "[WARN: 2025-10-21 07:05:09] adapter: Memory usage is high.");
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger::new(LevelFilter::Warn);
        let error = Metadata::builder().level(Level::Error).build();
        let info = Metadata::builder().level(Level::Info).build();
        assert!(logger.enabled(&error));
        assert!(!logger.enabled(&info));
    }

    #[test]
    fn test_level_palette() {
        assert_eq!(level_palette(Level::Error), Palette::Red);
        assert_eq!(level_palette(Level::Trace), Palette::Gray);
    }

    #[test]
    fn test_second_init_fails() {
        let _ = init(LevelFilter::Off);
        assert!(matches!(init(LevelFilter::Off), Err(PatternError::Logger(_))));
    }
}
