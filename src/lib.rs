//! Design Patterns - Shared Library
//!
//! Runnable examples for the creational and structural patterns live in
//! `src/bin/`. This crate holds the pieces they share:
//!
//! - [`colors`]: console palette used by every example
//! - [`snapshot`]: immutable snapshots derived with copy-with-changes
//! - [`history`]: linear undo/redo history over snapshots
//! - [`logger`]: console backend for the `log` facade
//! - [`config`]: TOML configuration for the history demo
//!
//! Run any example with:
//! ```bash
//! cargo run --bin <example_name>
//! ```

pub mod colors;
pub mod config;
pub mod error;
pub mod history;
pub mod logger;
pub mod snapshot;

pub use error::PatternError;
pub use history::History;
pub use snapshot::{CopyWith, EditorPatch, EditorState};
