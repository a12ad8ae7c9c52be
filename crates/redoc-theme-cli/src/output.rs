//! Structured output for CLI results.

use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while serializing output.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Output format for printed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// YAML
    Yaml,
}

impl OutputFormat {
    /// Serializes `data` in this format.
    pub fn serialize<T: Serialize>(self, data: &T) -> Result<String, SerializeError> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(data)?),
        }
    }
}
