//! Adapter Pattern: payment providers
//!
//! Three third-party services expose three different method names. One
//! adapter per service makes all of them look like a `PaymentProcessor`.
//!
//! Run with: cargo run --bin structural_01_payment_adapter

use design_patterns::colors::{paint, Palette};

trait PaymentProcessor {
    fn process_payment(&self, amount: f64) -> String;
}

// ==============================================================================
// External services (not under our control)
// ==============================================================================

struct PayPalService;
struct StripeService;
struct MercadoPagoService;

fn receipt(amount: f64, provider: &str, palette: Palette) -> String {
    format!("Processing payment of ${amount} with {}", paint(provider, palette))
}

impl PayPalService {
    fn send_payment(&self, amount: f64) -> String {
        receipt(amount, "PayPal", Palette::Blue)
    }
}

impl StripeService {
    fn make_charge(&self, amount: f64) -> String {
        receipt(amount, "Stripe", Palette::Purple)
    }
}

impl MercadoPagoService {
    fn pay(&self, amount: f64) -> String {
        receipt(amount, "MercadoPago", Palette::Yellow)
    }
}

// ==============================================================================
// Adapters
// ==============================================================================

struct PayPalAdapter {
    service: PayPalService,
}

struct StripeAdapter {
    service: StripeService,
}

struct MercadoPagoAdapter {
    service: MercadoPagoService,
}

impl PaymentProcessor for PayPalAdapter {
    fn process_payment(&self, amount: f64) -> String {
        self.service.send_payment(amount)
    }
}

impl PaymentProcessor for StripeAdapter {
    fn process_payment(&self, amount: f64) -> String {
        self.service.make_charge(amount)
    }
}

impl PaymentProcessor for MercadoPagoAdapter {
    fn process_payment(&self, amount: f64) -> String {
        self.service.pay(amount)
    }
}

fn processors() -> Vec<(&'static str, Box<dyn PaymentProcessor>)> {
    vec![
        (
            "PayPal",
            Box::new(PayPalAdapter { service: PayPalService }) as Box<dyn PaymentProcessor>,
        ),
        (
            "Stripe",
            Box::new(StripeAdapter { service: StripeService }) as Box<dyn PaymentProcessor>,
        ),
        (
            "MercadoPago",
            Box::new(MercadoPagoAdapter {
                service: MercadoPagoService,
            }) as Box<dyn PaymentProcessor>,
        ),
    ]
}

fn main() {
    let payment_amount = 100.0;

    for (name, processor) in processors() {
        println!("Using {name}:");
        println!("  {}\n", processor.process_payment(payment_amount));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_adapter_processes() {
        colored::control::set_override(false);
        let receipts: Vec<String> = processors()
            .iter()
            .map(|(_, processor)| processor.process_payment(100.0))
            .collect();

        assert_eq!(
            receipts,
            vec![
                "Processing payment of $100 with PayPal",
                "Processing payment of $100 with Stripe",
                "Processing payment of $100 with MercadoPago",
            ]
        );
    }

    #[test]
    fn test_fractional_amount() {
        colored::control::set_override(false);
        let adapter = StripeAdapter {
            service: StripeService,
        };
        assert_eq!(
            adapter.process_payment(12.5),
            "Processing payment of $12.5 with Stripe"
        );
    }
}
