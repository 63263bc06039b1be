//! Liskov Substitution: total area of a rectangle and a square.
//!
//! Run with: cargo run --bin p3_liskov_substitution

use solid_principles::{logging, DemoConfig, Principle, StdoutConsole};

fn main() {
    logging::init();
    Principle::LiskovSubstitution.run(&StdoutConsole, &DemoConfig::default());
}
