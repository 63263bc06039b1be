use crate::config::DemoConfig;
use crate::console::Console;
use crate::error::DemoError;
use crate::{
    dependency_inversion, interface_segregation, liskov_substitution, open_closed,
    single_responsibility,
};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Principle {
    SingleResponsibility,
    OpenClosed,
    LiskovSubstitution,
    InterfaceSegregation,
    DependencyInversion,
}

impl Principle {
    /// In SOLID order.
    pub const ALL: [Principle; 5] = [
        Principle::SingleResponsibility,
        Principle::OpenClosed,
        Principle::LiskovSubstitution,
        Principle::InterfaceSegregation,
        Principle::DependencyInversion,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "Single Responsibility",
            Principle::OpenClosed => "Open/Closed",
            Principle::LiskovSubstitution => "Liskov Substitution",
            Principle::InterfaceSegregation => "Interface Segregation",
            Principle::DependencyInversion => "Dependency Inversion",
        }
    }

    pub fn acronym(self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "SRP",
            Principle::OpenClosed => "OCP",
            Principle::LiskovSubstitution => "LSP",
            Principle::InterfaceSegregation => "ISP",
            Principle::DependencyInversion => "DIP",
        }
    }

    fn snake_name(self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "single_responsibility",
            Principle::OpenClosed => "open_closed",
            Principle::LiskovSubstitution => "liskov_substitution",
            Principle::InterfaceSegregation => "interface_segregation",
            Principle::DependencyInversion => "dependency_inversion",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Principle::SingleResponsibility => single_responsibility::SUMMARY,
            Principle::OpenClosed => open_closed::SUMMARY,
            Principle::LiskovSubstitution => liskov_substitution::SUMMARY,
            Principle::InterfaceSegregation => interface_segregation::SUMMARY,
            Principle::DependencyInversion => dependency_inversion::SUMMARY,
        }
    }

    /// Runs this principle's lesson, writing its lines to `console`.
    pub fn run(self, console: &dyn Console, config: &DemoConfig) {
        tracing::info!(principle = self.acronym(), "running lesson");
        match self {
            Principle::SingleResponsibility => single_responsibility::run(console, &config.email),
            Principle::OpenClosed => open_closed::run(console, &config.open_closed),
            Principle::LiskovSubstitution => liskov_substitution::run(console, &config.liskov),
            Principle::InterfaceSegregation => {
                interface_segregation::run(console, &config.printer)
            }
            Principle::DependencyInversion => {
                dependency_inversion::run(console, &config.data_source)
            }
        }
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Principle {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Principle::ALL
            .into_iter()
            .find(|p| p.acronym().eq_ignore_ascii_case(&wanted) || p.snake_name() == wanted)
            .ok_or_else(|| DemoError::UnknownPrinciple(s.to_string()))
    }
}
