use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to render config: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("Unknown principle '{0}' (expected one of srp, ocp, lsp, isp, dip)")]
    UnknownPrinciple(String),

    #[error("Invalid value {value} for '{field}': dimensions must be finite and non-negative")]
    InvalidDimension { field: String, value: f64 },
}

impl DemoError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_dimension(field: impl Into<String>, value: f64) -> Self {
        Self::InvalidDimension {
            field: field.into(),
            value,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
