//! Adapter Pattern: logging library
//!
//! The application talks to `LoggerAdapter`, never to the logging crate.
//! `LogCrateAdapter` translates those calls into the `log` facade, so the
//! backend can be swapped without touching callers.
//!
//! Run with: cargo run --bin structural_01_adapter

use std::process;

use log::LevelFilter;

use design_patterns::colors::{paint, Palette};
use design_patterns::{logger, PatternError};

trait LoggerAdapter {
    fn file(&self) -> &str;
    fn write_log(&self, msg: &str);
    fn write_warning(&self, msg: &str);
    fn write_error(&self, msg: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Log,
    Warning,
    Error,
}

impl Kind {
    fn label(self) -> &'static str {
        match self {
            Kind::Log => "log",
            Kind::Warning => "warning",
            Kind::Error => "error",
        }
    }
}

struct LogCrateAdapter {
    file: String,
}

impl LogCrateAdapter {
    fn new(file: impl Into<String>) -> Self {
        LogCrateAdapter { file: file.into() }
    }

    fn tag(&self, kind: Kind, msg: &str) -> String {
        format!("[{} {}] {}", self.file, kind.label(), msg)
    }
}

impl LoggerAdapter for LogCrateAdapter {
    fn file(&self) -> &str {
        &self.file
    }

    fn write_log(&self, msg: &str) {
        log::info!("{}", self.tag(Kind::Log, msg));
    }

    fn write_warning(&self, msg: &str) {
        log::warn!("{}", self.tag(Kind::Warning, msg));
    }

    fn write_error(&self, msg: &str) {
        log::error!("{}", self.tag(Kind::Error, msg));
    }
}

fn run() -> Result<(), PatternError> {
    logger::init(LevelFilter::Info)?;

    let adapter = LogCrateAdapter::new("structural_01_adapter.rs");
    adapter.write_log("Normal log");
    adapter.write_warning("Warning log");
    adapter.write_error("Error log");
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", paint(err.to_string(), Palette::Red));
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, Once};

    use log::{Level, Log, Metadata, Record};

    use super::*;

    static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
    static INSTALL: Once = Once::new();

    struct Capture;

    impl Log for Capture {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            RECORDS
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture;

    fn install_capture() {
        INSTALL.call_once(|| {
            log::set_logger(&CAPTURE).unwrap();
            log::set_max_level(LevelFilter::Trace);
        });
    }

    #[test]
    fn test_levels_follow_message_kind() {
        install_capture();
        let adapter = LogCrateAdapter::new("levels.rs");
        adapter.write_log("one");
        adapter.write_warning("two");
        adapter.write_error("three");

        let captured: Vec<(Level, String)> = RECORDS
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, msg)| msg.starts_with("[levels.rs "))
            .cloned()
            .collect();
        assert_eq!(
            captured,
            vec![
                (Level::Info, "[levels.rs log] one".to_string()),
                (Level::Warn, "[levels.rs warning] two".to_string()),
                (Level::Error, "[levels.rs error] three".to_string()),
            ]
        );
    }

    #[test]
    fn test_tags_messages_with_file() {
        let adapter = LogCrateAdapter::new("main.rs");
        assert_eq!(adapter.file(), "main.rs");
        assert_eq!(adapter.tag(Kind::Log, "hi"), "[main.rs log] hi");
        assert_eq!(adapter.tag(Kind::Warning, "hm"), "[main.rs warning] hm");
        assert_eq!(adapter.tag(Kind::Error, "no"), "[main.rs error] no");
    }

    #[test]
    fn test_usable_through_trait_object() {
        let adapter: Box<dyn LoggerAdapter> = Box::new(LogCrateAdapter::new("lib.rs"));
        adapter.write_log("ignored");
        adapter.write_warning("ignored");
        adapter.write_error("ignored");
        assert_eq!(adapter.file(), "lib.rs");
    }
}
