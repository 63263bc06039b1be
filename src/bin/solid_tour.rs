//! Runs every SOLID lesson in order, with a heading and an explanation.
//!
//! Run with: cargo run --bin solid_tour [-- path/to/config.toml]

use colored::Colorize;
use solid_principles::{logging, DemoConfig, Principle, StdoutConsole};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = match env::args().nth(1) {
        Some(path) => DemoConfig::load(&path)?,
        None => DemoConfig::default(),
    };

    for (index, principle) in Principle::ALL.into_iter().enumerate() {
        if index > 0 {
            println!();
        }
        let heading = format!("=== {} ({}) ===", principle.title(), principle.acronym());
        println!("{}", heading.bold());

        principle.run(&StdoutConsole, &config);

        println!("{}", principle.summary().dimmed());
    }

    Ok(())
}
