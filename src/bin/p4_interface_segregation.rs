//! Interface Segregation: one device, two independent contracts.
//!
//! Run with: cargo run --bin p4_interface_segregation

use solid_principles::{logging, DemoConfig, Principle, StdoutConsole};

fn main() {
    logging::init();
    Principle::InterfaceSegregation.run(&StdoutConsole, &DemoConfig::default());
}
