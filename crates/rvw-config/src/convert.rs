//! Settings for the CSV to JavaScript module conversion.

use rvw_core::ident::{DEFAULT_EXPORT_NAME, validate_export_name};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_input() -> String {
    "reviews.csv".to_string()
}

fn default_output() -> String {
    "reviewsData.js".to_string()
}

fn default_export_name() -> String {
    DEFAULT_EXPORT_NAME.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConvertConfig {
    /// CSV file to read, relative to the working directory.
    #[serde(default = "default_input")]
    pub input: String,

    /// JavaScript module to write. Overwritten if it exists.
    #[serde(default = "default_output")]
    pub output: String,

    /// Name bound by `export const <name> = ...;`.
    #[serde(default = "default_export_name")]
    pub export_name: String,

    /// Escape every non-ASCII character as `\uXXXX` in the emitted JSON.
    #[serde(default)]
    pub ascii_only: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            export_name: default_export_name(),
            ascii_only: false,
        }
    }
}

impl ConvertConfig {
    /// Reject values that cannot produce a loadable module.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty path or an export
    /// name that is not a JavaScript identifier.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "convert.input".into(),
                reason: "path is empty".into(),
            });
        }

        if self.output.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "convert.output".into(),
                reason: "path is empty".into(),
            });
        }

        validate_export_name(&self.export_name).map_err(|error| ConfigError::InvalidValue {
            field: "convert.export_name".into(),
            reason: error.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ConvertConfig::default();
        assert_eq!(config.input, "reviews.csv");
        assert_eq!(config.output, "reviewsData.js");
        assert_eq!(config.export_name, "reviewsData");
        assert!(!config.ascii_only);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_output_is_rejected() {
        let config = ConvertConfig {
            output: String::new(),
            ..ConvertConfig::default()
        };
        let err = config.validate().expect_err("empty output should fail");
        assert!(err.to_string().contains("convert.output"));
    }

    #[test]
    fn hyphenated_export_name_is_rejected() {
        let config = ConvertConfig {
            export_name: "reviews-data".into(),
            ..ConvertConfig::default()
        };
        let err = config.validate().expect_err("bad identifier should fail");
        assert!(err.to_string().contains("convert.export_name"));
    }
}
