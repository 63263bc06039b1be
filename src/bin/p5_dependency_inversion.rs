//! Dependency Inversion: BusinessLogic receives its DataProvider.
//!
//! Run with: cargo run --bin p5_dependency_inversion

use solid_principles::{logging, DemoConfig, Principle, StdoutConsole};

fn main() {
    logging::init();
    Principle::DependencyInversion.run(&StdoutConsole, &DemoConfig::default());
}
