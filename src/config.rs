//! TOML configuration for the history demo.
//!
//! ```toml
//! [history]
//! max_entries = 50
//!
//! [logging]
//! level = "debug"
//! ```

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

use crate::history::HistoryConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for field '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HistorySection {
    pub max_entries: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        LoggingSection {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogueConfig {
    pub history: HistorySection,
    pub logging: LoggingSection,
}

impl CatalogueConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CatalogueConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` when given, otherwise falls back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history.max_entries == Some(0) {
            return Err(ConfigError::invalid(
                "history.max_entries",
                "must be greater than 0",
            ));
        }
        self.log_level()?;
        Ok(())
    }

    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.logging.level).map_err(|_| {
            ConfigError::invalid(
                "logging.level",
                format!(
                    "'{}' is not one of off/error/warn/info/debug/trace",
                    self.logging.level
                ),
            )
        })
    }

    pub fn history_config(&self) -> HistoryConfig {
        self.history
            .max_entries
            .and_then(NonZeroUsize::new)
            .map(HistoryConfig::bounded)
            .unwrap_or_default()
    }
}
