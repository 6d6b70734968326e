//! Configuration system for Elevators.
//!
//! Describe an elevator problem over integer grades in TOML or YAML and
//! build the enumeration context from it without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use elevators_config::ElevatorConfig;
//! use elevators_core::BigUint;
//!
//! let config = ElevatorConfig::from_toml_str(r#"
//!     grades = [1, 1, 2, 3]
//!     degree = 3
//!     upper_bounds = [1, 1, 1, 1]
//! "#).unwrap();
//!
//! let elevator = config.build().unwrap();
//! assert_eq!(elevator.count(), BigUint::from(3u32));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use elevators_config::ElevatorConfig;
//!
//! let config = ElevatorConfig::load("elevator.toml").unwrap_or_default();
//! // Proceeds with the empty problem of degree zero
//! ```

use std::path::Path;

use elevators_core::{ConfigurationError, Elevator};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Elevator rejected configuration: {0}")]
    Elevator(#[from] ConfigurationError),
}

/// An elevator problem whose list is its own grading.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ElevatorConfig {
    /// Grades of the list, sorted non-decreasingly.
    #[serde(default)]
    pub grades: Vec<i64>,

    /// Target degree.
    #[serde(default)]
    pub degree: i64,

    /// Minimum multiplicity per index; zero everywhere when omitted.
    #[serde(default)]
    pub lower_bounds: Option<Vec<i64>>,

    /// Maximum multiplicity per index; unbounded everywhere when omitted.
    #[serde(default)]
    pub upper_bounds: Option<Vec<i64>>,

    /// Environment mode affecting assertions.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,
}

impl ElevatorConfig {
    /// Creates a configuration for `grades` at `degree` with no bounds.
    pub fn new(grades: Vec<i64>, degree: i64) -> Self {
        Self {
            grades,
            degree,
            ..Self::default()
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the lower bounds.
    pub fn with_lower_bounds(mut self, bounds: Vec<i64>) -> Self {
        self.lower_bounds = Some(bounds);
        self
    }

    /// Sets the upper bounds.
    pub fn with_upper_bounds(mut self, bounds: Vec<i64>) -> Self {
        self.upper_bounds = Some(bounds);
        self
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Builds the elevator described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an empty bound list on a
    /// non-empty problem, and [`ConfigError::Elevator`] for anything the
    /// elevator itself rejects.
    pub fn build(&self) -> Result<Elevator<i64>, ConfigError> {
        let mut builder = Elevator::builder(self.grades.clone(), |g: &i64| *g, self.degree)
            .full_assert(self.environment_mode.is_asserted());

        if let Some(lower) = &self.lower_bounds {
            self.check_not_empty("lower_bounds", lower)?;
            builder = builder.lower_bounds(lower.clone());
        }
        if let Some(upper) = &self.upper_bounds {
            self.check_not_empty("upper_bounds", upper)?;
            builder = builder.upper_bounds(upper.iter().copied().map(Some).collect::<Vec<_>>());
        }

        Ok(builder.build()?)
    }

    fn check_not_empty(&self, field: &str, bounds: &[i64]) -> Result<(), ConfigError> {
        if bounds.is_empty() && !self.grades.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "{field} is empty; omit it to use the default"
            )));
        }
        Ok(())
    }
}

/// Environment mode affecting elevator behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// No extra checks.
    #[default]
    Fast,

    /// Every produced elevation is re-validated.
    FullAssert,
}

impl EnvironmentMode {
    /// Returns `true` if produced elevations are re-validated.
    pub fn is_asserted(&self) -> bool {
        matches!(self, EnvironmentMode::FullAssert)
    }
}

#[cfg(test)]
mod tests;
