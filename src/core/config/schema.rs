//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Example
//!
//! ```toml
//! data_file = "/home/me/roster.toml"
//! output = "json"
//! ```
//!
//! # Validation
//!
//! Values are validated after parsing; unknown keys are rejected while
//! parsing.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Accepted values for `output`.
pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

/// User configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Fixture loaded when `--data` is not given
    pub data_file: Option<PathBuf>,

    /// Default output format ("text" or "json")
    pub output: Option<String>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(output) = &self.output {
            if !OUTPUT_FORMATS.contains(&output.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid output '{}', must be one of: {}",
                    output,
                    OUTPUT_FORMATS.join(", ")
                )));
            }
        }

        if let Some(path) = &self.data_file {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "data_file may not be empty".into(),
                ));
            }
        }

        Ok(())
    }
}
