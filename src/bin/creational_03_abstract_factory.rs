//! Abstract Factory
//!
//! A factory creates a whole family of related products, so the client
//! never mixes an electric car with a gas engine.
//!
//! Run with: cargo run --bin creational_03_abstract_factory

use design_patterns::colors::{paint, Palette};

// ==============================================================================
// Milestone 1: Vehicle families
// ==============================================================================

trait Vehicle {
    fn assemble(&self) -> String;
}

trait Engine {
    fn start(&self) -> String;
}

struct ElectricCar;
struct GasCar;
struct ElectricEngine;
struct GasEngine;

impl Vehicle for ElectricCar {
    fn assemble(&self) -> String {
        format!("Assembling an {}", paint("electric car", Palette::Violet))
    }
}

impl Vehicle for GasCar {
    fn assemble(&self) -> String {
        format!("Assembling a {}", paint("gas car", Palette::Cyan))
    }
}

impl Engine for ElectricEngine {
    fn start(&self) -> String {
        format!("Starting {}", paint("electric engine", Palette::Violet))
    }
}

impl Engine for GasEngine {
    fn start(&self) -> String {
        format!("Starting {}", paint("gas engine", Palette::Cyan))
    }
}

trait VehicleFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle>;
    fn create_engine(&self) -> Box<dyn Engine>;
}

struct ElectricVehicleFactory;
struct GasVehicleFactory;

impl VehicleFactory for ElectricVehicleFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(ElectricCar)
    }

    fn create_engine(&self) -> Box<dyn Engine> {
        Box::new(ElectricEngine)
    }
}

impl VehicleFactory for GasVehicleFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(GasCar)
    }

    fn create_engine(&self) -> Box<dyn Engine> {
        Box::new(GasEngine)
    }
}

fn build_vehicle(factory: &dyn VehicleFactory) -> Vec<String> {
    let vehicle = factory.create_vehicle();
    let engine = factory.create_engine();
    vec![vehicle.assemble(), engine.start()]
}

// ==============================================================================
// Milestone 2: Restaurant families (hamburger + drink)
// ==============================================================================

trait Hamburger {
    fn prepare(&self) -> String;
}

trait Drink {
    fn pour(&self) -> String;
}

struct BeefHamburger;
struct ChickenHamburger;
struct Soda;
struct Water;

impl Hamburger for BeefHamburger {
    fn prepare(&self) -> String {
        format!("Preparing a {}", paint("beef hamburger", Palette::Brown))
    }
}

impl Hamburger for ChickenHamburger {
    fn prepare(&self) -> String {
        format!("Preparing a {}", paint("chicken hamburger", Palette::Yellow))
    }
}

impl Drink for Soda {
    fn pour(&self) -> String {
        format!("Pouring a {}", paint("soda", Palette::Blue))
    }
}

impl Drink for Water {
    fn pour(&self) -> String {
        format!("Pouring a glass of {}", paint("water", Palette::Cyan))
    }
}

trait FastFoodFactory {
    fn create_hamburger(&self) -> Box<dyn Hamburger>;
    fn create_drink(&self) -> Box<dyn Drink>;
}

struct ClassicMenu;
struct HealthyMenu;

impl FastFoodFactory for ClassicMenu {
    fn create_hamburger(&self) -> Box<dyn Hamburger> {
        Box::new(BeefHamburger)
    }

    fn create_drink(&self) -> Box<dyn Drink> {
        Box::new(Soda)
    }
}

impl FastFoodFactory for HealthyMenu {
    fn create_hamburger(&self) -> Box<dyn Hamburger> {
        Box::new(ChickenHamburger)
    }

    fn create_drink(&self) -> Box<dyn Drink> {
        Box::new(Water)
    }
}

fn serve_menu(factory: &dyn FastFoodFactory) -> Vec<String> {
    vec![
        factory.create_hamburger().prepare(),
        factory.create_drink().pour(),
    ]
}

fn main() {
    println!("Creating electric vehicle:");
    for line in build_vehicle(&ElectricVehicleFactory) {
        println!("  {line}");
    }

    println!("\nCreating gas vehicle:");
    for line in build_vehicle(&GasVehicleFactory) {
        println!("  {line}");
    }

    println!("\nClassic menu:");
    for line in serve_menu(&ClassicMenu) {
        println!("  {line}");
    }

    println!("\nHealthy menu:");
    for line in serve_menu(&HealthyMenu) {
        println!("  {line}");
    }
}
