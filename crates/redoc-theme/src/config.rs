//! Plugin configuration as written in the site config.
//!
//! Accepts YAML or JSON:
//!
//! ```yaml
//! primaryColor: "#1890ff"
//! redocOptions:
//!   hideDownloadButton: false
//!   disableSearch: true
//! ```

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::ThemeError;
use crate::options::RendererOptions;

/// Inbound plugin options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Brand color for links, buttons and highlights.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    /// Site-wide renderer options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redoc_options: Option<RendererOptions>,
}

/// On-disk formats for [`ThemeConfig::from_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// `.json` is JSON; anything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

impl ThemeConfig {
    /// Parses YAML content. An empty document is an empty config.
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        parse_yaml(yaml)
    }

    /// Parses JSON content.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        parse_json(json)
    }

    /// Loads a config file, picking the format from its extension.
    ///
    /// # Errors
    ///
    /// [`ThemeError::Load`] if the file cannot be read, [`ThemeError::Parse`]
    /// if its content is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        load_file(path.as_ref())
    }
}

/// Parses a YAML document into `T`.
///
/// YAML mapping keys such as `50:` are integers, while every typed section
/// expects string keys. Content goes through a JSON value with all keys
/// stringified first, so `gray: {50: ...}` reads the same as `{"50": ...}`.
pub(crate) fn parse_yaml<T: DeserializeOwned + Default>(yaml: &str) -> Result<T, ThemeError> {
    if yaml.trim().is_empty() {
        return Ok(T::default());
    }
    let value: serde_yaml::Value =
        serde_yaml::from_str(yaml).map_err(|e| ThemeError::parse(None, e.to_string()))?;
    serde_json::from_value(yaml_to_json(value)).map_err(|e| ThemeError::parse(None, e.to_string()))
}

pub(crate) fn parse_json<T: DeserializeOwned>(json: &str) -> Result<T, ThemeError> {
    serde_json::from_str(json).map_err(|e| ThemeError::parse(None, e.to_string()))
}

/// Reads and parses a YAML or JSON file, attaching the path to errors.
pub(crate) fn load_file<T: DeserializeOwned + Default>(path: &Path) -> Result<T, ThemeError> {
    let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = match ConfigFormat::from_path(path) {
        ConfigFormat::Json => parse_json(&content),
        ConfigFormat::Yaml => parse_yaml(&content),
    };
    parsed.map_err(|err| match err {
        ThemeError::Parse { message, .. } => ThemeError::parse(Some(path.to_path_buf()), message),
        other => other,
    })
}

fn yaml_to_json(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => yaml_number(&n),
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => {
            Value::Array(items.into_iter().map(yaml_to_json).collect())
        }
        serde_yaml::Value::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, value) in mapping {
                map.insert(yaml_key(key), yaml_to_json(value));
            }
            Value::Object(map)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Number(i.into())
    } else if let Some(u) = n.as_u64() {
        Value::Number(u.into())
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

fn yaml_key(key: serde_yaml::Value) -> String {
    match yaml_to_json(key) {
        Value::String(s) => s,
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}
