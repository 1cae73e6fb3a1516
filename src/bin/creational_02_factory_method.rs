//! Factory Method
//!
//! Object creation is delegated to an overridable method, so the caller
//! never names the concrete type it ends up with.
//!
//! Run with: cargo run --bin creational_02_factory_method -- beef

use std::io::{self, BufRead, Write};
use std::process;
use std::str::FromStr;

use design_patterns::colors::{paint, Palette};
use design_patterns::PatternError;

// ==============================================================================
// Products
// ==============================================================================

trait Hamburger {
    fn prepare(&self) -> String;
}

struct ChickenHamburger;
struct BeefHamburger;
struct BeanHamburger;

impl Hamburger for ChickenHamburger {
    fn prepare(&self) -> String {
        format!("Preparing a {}", paint("chicken hamburger", Palette::Yellow))
    }
}

impl Hamburger for BeefHamburger {
    fn prepare(&self) -> String {
        format!("Preparing a {}", paint("beef hamburger", Palette::Brown))
    }
}

impl Hamburger for BeanHamburger {
    fn prepare(&self) -> String {
        format!("Preparing a {}", paint("bean hamburger", Palette::Green))
    }
}

// ==============================================================================
// Creators
// ==============================================================================

trait Restaurant {
    fn create_hamburger(&self) -> Box<dyn Hamburger>;

    fn order_hamburger(&self) -> String {
        let hamburger = self.create_hamburger();
        hamburger.prepare()
    }
}

struct ChickenRestaurant;
struct BeefRestaurant;
struct BeanRestaurant;

impl Restaurant for ChickenRestaurant {
    fn create_hamburger(&self) -> Box<dyn Hamburger> {
        Box::new(ChickenHamburger)
    }
}

impl Restaurant for BeefRestaurant {
    fn create_hamburger(&self) -> Box<dyn Hamburger> {
        Box::new(BeefHamburger)
    }
}

impl Restaurant for BeanRestaurant {
    fn create_hamburger(&self) -> Box<dyn Hamburger> {
        Box::new(BeanHamburger)
    }
}

// ==============================================================================
// Choosing a creator
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BurgerKind {
    Chicken,
    Beef,
    Bean,
}

impl BurgerKind {
    const OPTIONS: [&'static str; 3] = ["chicken", "beef", "bean"];

    fn restaurant(self) -> Box<dyn Restaurant> {
        match self {
            BurgerKind::Chicken => Box::new(ChickenRestaurant),
            BurgerKind::Beef => Box::new(BeefRestaurant),
            BurgerKind::Bean => Box::new(BeanRestaurant),
        }
    }
}

impl FromStr for BurgerKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chicken" => Ok(BurgerKind::Chicken),
            "beef" => Ok(BurgerKind::Beef),
            "bean" => Ok(BurgerKind::Bean),
            other => Err(PatternError::invalid_choice(other, &Self::OPTIONS)),
        }
    }
}

fn ask_for_choice() -> Result<String, PatternError> {
    print!("What hamburger do you want? ({}) ", BurgerKind::OPTIONS.join("/"));
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn run() -> Result<(), PatternError> {
    let choice = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => ask_for_choice()?,
    };

    let restaurant = choice.parse::<BurgerKind>()?.restaurant();
    println!("{}", restaurant.order_hamburger());
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
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_each_restaurant_makes_its_burger() {
        plain();
        assert_eq!(ChickenRestaurant.order_hamburger(), "Preparing a chicken hamburger");
        assert_eq!(BeefRestaurant.order_hamburger(), "Preparing a beef hamburger");
        assert_eq!(BeanRestaurant.order_hamburger(), "Preparing a bean hamburger");
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!("chicken".parse::<BurgerKind>().unwrap(), BurgerKind::Chicken);
        assert_eq!(" Beef\n".parse::<BurgerKind>().unwrap(), BurgerKind::Beef);
        assert_eq!("bean".parse::<BurgerKind>().unwrap(), BurgerKind::Bean);
    }

    #[test]
    fn test_invalid_choice() {
        let err = "pizza".parse::<BurgerKind>().unwrap_err();
        assert!(matches!(err, PatternError::InvalidChoice { ref input, .. } if input == "pizza"));
    }

    #[test]
    fn test_kind_picks_restaurant() {
        plain();
        let order = BurgerKind::Bean.restaurant().order_hamburger();
        assert!(order.ends_with("bean hamburger"));
    }
}
