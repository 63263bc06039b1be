//! # SOLID Principles in Rust
//!
//! One small lesson per principle, each with its own binary:
//!
//! - `p1_single_responsibility`: one type, one job ([`single_responsibility`])
//! - `p2_open_closed`: extend by adding impls, not by editing ([`open_closed`])
//! - `p3_liskov_substitution`: implementers are interchangeable ([`liskov_substitution`])
//! - `p4_interface_segregation`: narrow contracts ([`interface_segregation`])
//! - `p5_dependency_inversion`: inject abstractions ([`dependency_inversion`])
//!
//! `solid_tour` runs all five in order.
//!
//! Run with: `cargo run --bin <name>`

pub mod config;
pub mod console;
pub mod dependency_inversion;
pub mod error;
pub mod interface_segregation;
pub mod liskov_substitution;
pub mod logging;
pub mod open_closed;
pub mod principle;
pub mod single_responsibility;

pub use config::DemoConfig;
pub use console::{Console, StdoutConsole, Transcript};
pub use error::DemoError;
pub use principle::Principle;
