//! Immutability with copy
//!
//! When an object cannot change in place, make a modified copy instead.
//! Each copy is a point-in-time state that can be kept for history.
//!
//! Run with: cargo run --bin creational_05_immutability

use design_patterns::colors::{paint, Palette};
use design_patterns::CopyWith;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Player {
    name: String,
    score: u32,
    level: u32,
}

#[derive(Debug, Default)]
struct PlayerPatch {
    name: Option<String>,
    score: Option<u32>,
    level: Option<u32>,
}

impl Player {
    fn new(name: impl Into<String>, score: u32, level: u32) -> Self {
        Player {
            name: name.into(),
            score,
            level,
        }
    }

    fn display_state(&self) -> String {
        format!(
            "{}\n{}\n{}",
            paint(format!("Player: {}", self.name), Palette::Green),
            paint(format!("Score: {}", self.score), Palette::Yellow),
            paint(format!("Level: {}", self.level), Palette::Blue)
        )
    }
}

impl CopyWith for Player {
    type Patch = PlayerPatch;

    fn copy_with(&self, patch: PlayerPatch) -> Self {
        Player {
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            score: patch.score.unwrap_or(self.score),
            level: patch.level.unwrap_or(self.level),
        }
    }
}

fn main() {
    let player = Player::new("Carlos", 0, 1);
    println!("Initial state:");
    println!("{}", player.display_state());

    let player = player.copy_with(PlayerPatch {
        score: Some(10),
        ..Default::default()
    });
    println!("\nAfter incrementing the score:");
    println!("{}", player.display_state());

    let player = player.copy_with(PlayerPatch {
        level: Some(2),
        ..Default::default()
    });
    println!("\nAfter leveling up:");
    println!("{}", player.display_state());

    let player = player.copy_with(PlayerPatch {
        name: Some("Carlos Pro".to_string()),
        ..Default::default()
    });
    println!("\nAfter changing the name:");
    println!("{}", player.display_state());
}
