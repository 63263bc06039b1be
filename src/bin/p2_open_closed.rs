//! Open/Closed: total area of a rectangle and a circle.
//!
//! Run with: cargo run --bin p2_open_closed

use solid_principles::{logging, DemoConfig, Principle, StdoutConsole};

fn main() {
    logging::init();
    Principle::OpenClosed.run(&StdoutConsole, &DemoConfig::default());
}
