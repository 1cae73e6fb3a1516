//! Immutability with copy: undo/redo history
//!
//! Every edit derives a new `EditorState` and saves it. Undo and redo move
//! a cursor over the saved states; saving after an undo drops the redo branch.
//!
//! Run with: cargo run --bin creational_05_history -- patterns.toml

use std::path::PathBuf;
use std::process;

use log::info;

use design_patterns::colors::{heading, paint, Palette};
use design_patterns::config::CatalogueConfig;
use design_patterns::{logger, EditorPatch, EditorState, History, PatternError};

fn describe(action: &str, result: Option<&EditorState>) -> String {
    match result {
        Some(state) => format!("{:<8} -> {}", action, paint(state.to_string(), Palette::Green)),
        None => format!("{:<8} -> {}", action, paint(format!("nothing to {action}"), Palette::Gray)),
    }
}

fn render_log(history: &History<EditorState>) -> String {
    history
        .into_iter()
        .enumerate()
        .map(|(index, state)| {
            let marker = if history.cursor() == Some(index) { ">" } else { " " };
            format!("{marker} {index}: {state}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Walks the history through edit, undo, redo and a branching edit.
fn session(history: &mut History<EditorState>) -> Vec<String> {
    let mut lines = Vec::new();

    let a = EditorState::clean("Hello");
    let b = a.derive_with(EditorPatch::new().content("Hello, world").cursor(12).dirty(true));
    let c = b.derive_with(EditorPatch::new().content("Hello, world!").cursor(13));

    for (label, state) in [("A", a), ("B", b.clone()), ("C", c)] {
        lines.push(format!("{:<8} -> {}", format!("save {label}"), state));
        history.save(state);
    }

    lines.push(describe("undo", history.undo()));
    lines.push(describe("undo", history.undo()));
    lines.push(describe("redo", history.redo()));

    let d = b.derive_with(EditorPatch::new().content("Hello, Rust").cursor(11).tags(["branch"]));
    lines.push(format!("{:<8} -> {}", "save D", d));
    history.save(d);

    lines.push(describe("redo", history.redo()));
    lines
}

fn run() -> Result<(), PatternError> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = CatalogueConfig::load_or_default(config_path.as_deref())?;
    logger::init(config.log_level()?)?;

    let mut history = History::with_config(config.history_config());
    info!("history capacity: {:?}", history.config().max_entries);

    println!("{}", heading("Editing session:", Palette::Blue));
    for line in session(&mut history) {
        println!("  {line}");
    }

    println!("\n{}", heading("Log:", Palette::Cyan));
    println!("{}", render_log(&history));

    let json = serde_json::to_string_pretty(&history)?;
    println!("\n{}", heading("As JSON:", Palette::Yellow));
    println!("{json}");
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", paint(err.to_string(), Palette::Red));
        process::exit(1);
    }
}
