//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const OUTPUT_FORMATS: [&str; 3] = ["json", "table", "raw"];

fn default_format() -> String {
    "json".to_string()
}

fn default_export_file_name() -> String {
    "drug_interactions.csv".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Output format used when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,

    /// File written by `rxc export --save`.
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            export_file_name: default_export_file_name(),
        }
    }
}

impl GeneralConfig {
    /// Check field values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unknown output format or an
    /// empty export file name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !OUTPUT_FORMATS.contains(&self.default_format.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.default_format".into(),
                reason: format!(
                    "expected one of {}, got '{}'",
                    OUTPUT_FORMATS.join(", "),
                    self.default_format
                ),
            });
        }
        if self.export_file_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.export_file_name".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}
