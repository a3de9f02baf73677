//! Assessment configuration.
//!
//! The configuration is read from TOML:
//!
//! ```toml
//! [minimum_thickness]
//! method = "fraction-of-original"   # or "hydrostatic" (the default)
//! fraction = 0.5
//! ```
//!
//! An empty document selects the defaults.

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::minimum_thickness::{FractionError, FractionOfOriginal, MinimumThicknessMethod};

/// Settings for an assessment run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AssessmentConfig {
    minimum_thickness: MinimumThicknessMethod,
}

/// Errors that can occur when loading an [`AssessmentConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Fraction(#[from] FractionError),

    #[error("`fraction` only applies to the `fraction-of-original` method")]
    UnexpectedFraction,
}

impl AssessmentConfig {
    /// Creates a config using the given minimum thickness method.
    #[must_use]
    pub fn new(minimum_thickness: MinimumThicknessMethod) -> Self {
        Self { minimum_thickness }
    }

    /// Parses a config from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the document is malformed or a value is invalid.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        raw.try_into()
    }

    /// Loads a config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;

        tracing::debug!(path = %path.display(), ?config, "loaded assessment config");
        Ok(config)
    }

    /// Returns the configured minimum thickness method.
    #[must_use]
    pub fn minimum_thickness(&self) -> MinimumThicknessMethod {
        self.minimum_thickness
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    minimum_thickness: RawMinimumThickness,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMinimumThickness {
    #[serde(default)]
    method: MethodName,
    fraction: Option<f64>,
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum MethodName {
    #[default]
    Hydrostatic,
    FractionOfOriginal,
}

impl TryFrom<RawConfig> for AssessmentConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let RawMinimumThickness { method, fraction } = raw.minimum_thickness;

        let minimum_thickness = match (method, fraction) {
            (MethodName::Hydrostatic, None) => MinimumThicknessMethod::Hydrostatic,
            (MethodName::Hydrostatic, Some(_)) => return Err(ConfigError::UnexpectedFraction),
            (MethodName::FractionOfOriginal, None) => {
                MinimumThicknessMethod::FractionOfOriginal(FractionOfOriginal::HALF)
            }
            (MethodName::FractionOfOriginal, Some(fraction)) => {
                MinimumThicknessMethod::FractionOfOriginal(FractionOfOriginal::new(fraction)?)
            }
        };

        Ok(Self { minimum_thickness })
    }
}
