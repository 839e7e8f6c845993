//! Typed activity input.

use serde::Deserialize;
use serde::Serialize;

use crate::ActivityError;
use crate::Result;

/// Maximum path length in bytes (Linux/macOS `PATH_MAX` is typically 4096)
const MAX_PATH_LENGTH: usize = 4096;

/// Input of one activity evaluation.
///
/// Deserialized from the JSON object the workflow engine hands over:
///
/// ```json
/// { "action": "unzip", "sourceFile": "in.zip", "targetDirectory": "out" }
/// ```
///
/// The action stays a string here; [`crate::Action`] decides whether it is
/// supported, so an unknown action is a result and not a configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ActivityInput {
    /// Operation requested by the workflow.
    pub action: String,
    /// Path of the zip archive to read.
    pub source_file: String,
    /// Directory that receives the archive's contents.
    pub target_directory: String,
}

impl ActivityInput {
    /// Builds an input from its parts.
    #[must_use]
    pub fn new(
        action: impl Into<String>,
        source_file: impl Into<String>,
        target_directory: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            source_file: source_file.into(),
            target_directory: target_directory.into(),
        }
    }

    /// Parses an input from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::Config` if a field is missing, unknown, or of
    /// the wrong JSON type.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ActivityError::Config {
            reason: e.to_string(),
        })
    }

    /// Parses an input from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::Config` if the text is not valid JSON or does
    /// not describe an input.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| ActivityError::Config {
            reason: e.to_string(),
        })
    }

    /// Checks the path fields before they reach the extractor.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::Config` if a path is empty, contains a null
    /// byte, or exceeds the maximum path length.
    pub fn validate(&self) -> Result<()> {
        validate_path("sourceFile", &self.source_file)?;
        validate_path("targetDirectory", &self.target_directory)
    }
}

fn validate_path(field: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ActivityError::Config {
            reason: format!("{field} must not be empty"),
        });
    }

    if path.contains('\0') {
        return Err(ActivityError::Config {
            reason: format!("{field} contains null bytes"),
        });
    }

    if path.len() > MAX_PATH_LENGTH {
        return Err(ActivityError::Config {
            reason: format!(
                "{field} exceeds maximum length of {MAX_PATH_LENGTH} bytes (got {} bytes)",
                path.len()
            ),
        });
    }

    Ok(())
}
