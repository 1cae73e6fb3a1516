use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the example binaries.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Not a valid option: '{input}' (expected one of: {expected})")]
    InvalidChoice { input: String, expected: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl PatternError {
    pub fn invalid_choice(input: impl Into<String>, expected: &[&str]) -> Self {
        Self::InvalidChoice {
            input: input.into(),
            expected: expected.join("/"),
        }
    }
}
