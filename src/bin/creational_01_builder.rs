//! Builder Pattern
//!
//! Builds a complex object step by step. The same construction code can
//! produce different configurations of the object.
//!
//! Run with: cargo run --bin creational_01_builder

use design_patterns::colors::{heading, Palette};

// ==============================================================================
// Product
// ==============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Computer {
    cpu: String,
    ram: String,
    storage: String,
    gpu: Option<String>,
}

impl Default for Computer {
    fn default() -> Self {
        Computer {
            cpu: "cpu - not defined".to_string(),
            ram: "ram - not defined".to_string(),
            storage: "storage - not defined".to_string(),
            gpu: None,
        }
    }
}

impl Computer {
    fn configuration(&self) -> String {
        format!(
            "Computer Configuration\n  CPU: {}\n  RAM: {}\n  Storage: {}\n  GPU: {}",
            self.cpu,
            self.ram,
            self.storage,
            self.gpu.as_deref().unwrap_or("It does not have GPU")
        )
    }
}

// ==============================================================================
// Consuming builder
// ==============================================================================

#[derive(Default)]
struct ComputerBuilder {
    computer: Computer,
}

impl ComputerBuilder {
    fn new() -> Self {
        Self::default()
    }

    fn cpu(mut self, cpu: impl Into<String>) -> Self {
        self.computer.cpu = cpu.into();
        self
    }

    fn ram(mut self, ram: impl Into<String>) -> Self {
        self.computer.ram = ram.into();
        self
    }

    fn storage(mut self, storage: impl Into<String>) -> Self {
        self.computer.storage = storage.into();
        self
    }

    fn gpu(mut self, gpu: impl Into<String>) -> Self {
        self.computer.gpu = Some(gpu.into());
        self
    }

    fn build(self) -> Computer {
        self.computer
    }
}

fn main() {
    let basic = ComputerBuilder::new()
        .cpu("Intel Core 2 Duo")
        .ram("4GB")
        .storage("256GB")
        .build();

    println!("{}", heading("Basic Computer:", Palette::Blue));
    println!("{}\n", basic.configuration());

    let gaming = ComputerBuilder::new()
        .cpu("Intel i9")
        .ram("32GB")
        .storage("1TB M2")
        .gpu("Nvidia RTX 5090")
        .build();

    println!("{}", heading("Gaming Computer:", Palette::Cyan));
    println!("{}", gaming.configuration());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_parts_keep_defaults() {
        let computer = ComputerBuilder::new().cpu("Ryzen 5").build();
        assert_eq!(computer.cpu, "Ryzen 5");
        assert_eq!(computer.ram, "ram - not defined");
        assert_eq!(computer.storage, "storage - not defined");
        assert_eq!(computer.gpu, None);
    }

    #[test]
    fn test_configuration_without_gpu() {
        let computer = ComputerBuilder::new().ram("8GB").build();
        let text = computer.configuration();
        assert!(text.contains("RAM: 8GB"));
        assert!(text.ends_with("GPU: It does not have GPU"));
    }

    #[test]
    fn test_full_build() {
        let computer = ComputerBuilder::new()
            .cpu("Intel i9")
            .ram("32GB")
            .storage("1TB M2")
            .gpu("Nvidia RTX 5090")
            .build();
        assert_eq!(computer.gpu.as_deref(), Some("Nvidia RTX 5090"));
        assert!(computer.configuration().contains("Storage: 1TB M2"));
    }
}
