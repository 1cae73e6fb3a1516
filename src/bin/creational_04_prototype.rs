//! Prototype Pattern
//!
//! New objects are produced by copying an existing one. `Clone` on a
//! `Vec` copies every element, so a cloned Pokemon learns moves on its own.
//!
//! Run with: cargo run --bin creational_04_prototype

use design_patterns::colors::{heading, Palette};

#[derive(Debug, Clone, PartialEq)]
struct Pokemon {
    name: String,
    kind: String,
    level: u32,
    attacks: Vec<String>,
}

impl Pokemon {
    fn new(name: impl Into<String>, kind: impl Into<String>, level: u32, attacks: &[&str]) -> Self {
        Pokemon {
            name: name.into(),
            kind: kind.into(),
            level,
            attacks: attacks.iter().map(|attack| attack.to_string()).collect(),
        }
    }

    fn display_info(&self) -> String {
        format!(
            "Name: {}\nType: {}\nLevel: {}\nAttacks: {}",
            self.name,
            self.kind,
            self.level,
            self.attacks.join(", ")
        )
    }
}

fn main() {
    let base = Pokemon::new("Charmander", "Fire", 1, &["Ember", "Scratch"]);

    let mut evolved = base.clone();
    evolved.name = "Charmeleon".to_string();
    evolved.level = 16;
    evolved.attacks.push("Flamethrower".to_string());

    println!("{}", heading("Base:", Palette::Orange));
    println!("{}\n", base.display_info());

    println!("{}", heading("Clone:", Palette::Red));
    println!("{}", evolved.display_info());
}
