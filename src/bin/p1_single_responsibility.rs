//! Single Responsibility: EmailSender sends, EmailSendingExample decides what to send.
//!
//! Run with: cargo run --bin p1_single_responsibility

use solid_principles::{logging, DemoConfig, Principle, StdoutConsole};

fn main() {
    logging::init();
    Principle::SingleResponsibility.run(&StdoutConsole, &DemoConfig::default());
}
