//! The literal values each lesson's driver passes to its types.
//!
//! `DemoConfig::default()` holds the values the lesson binaries use. The tour
//! binary can override any of them from a TOML file; keys left out keep their
//! defaults.

use crate::error::{DemoError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub recipient: String,
    pub subject: String,
    pub content: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            recipient: "example@example.com".to_string(),
            subject: "Test Email".to_string(),
            content: "This is a test email.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectangleConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for RectangleConfig {
    fn default() -> Self {
        Self {
            width: 5.0,
            height: 4.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenClosedConfig {
    pub circle_radius: f64,
    pub rectangle: RectangleConfig,
}

impl Default for OpenClosedConfig {
    fn default() -> Self {
        Self {
            circle_radius: 3.0,
            rectangle: RectangleConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiskovConfig {
    pub square_side: f64,
    pub rectangle: RectangleConfig,
}

impl Default for LiskovConfig {
    fn default() -> Self {
        Self {
            square_side: 3.0,
            rectangle: RectangleConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    pub document: String,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            document: "Test document".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSourceConfig {
    pub database_data: String,
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            database_data: "Data from database".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub email: EmailConfig,
    pub open_closed: OpenClosedConfig,
    pub liskov: LiskovConfig,
    pub printer: PrinterConfig,
    pub data_source: DataSourceConfig,
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|err| DemoError::io(path, err))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded demo config");
        Ok(config)
    }

    /// Rejects shape dimensions that are negative, NaN or infinite.
    pub fn validate(&self) -> Result<()> {
        let dimensions = [
            ("open_closed.rectangle.width", self.open_closed.rectangle.width),
            ("open_closed.rectangle.height", self.open_closed.rectangle.height),
            ("open_closed.circle_radius", self.open_closed.circle_radius),
            ("liskov.rectangle.width", self.liskov.rectangle.width),
            ("liskov.rectangle.height", self.liskov.rectangle.height),
            ("liskov.square_side", self.liskov.square_side),
        ];

        for (field, value) in dimensions {
            if !value.is_finite() || value < 0.0 {
                return Err(DemoError::invalid_dimension(field, value));
            }
        }
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
