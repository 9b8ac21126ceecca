//! Configuration bundle for confidence estimators

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Key naming the registered confidence method
pub const CONFIDENCE_METHOD_KEY: &str = "confidence_method";

/// Configuration loading and lookup errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing `confidence_method` key")]
    MissingMethod,
    #[error("`confidence_method` must be a string, found {found}")]
    MethodNotString { found: &'static str },
    #[error("no confidence method named `{method}` supported (available: {available:?})")]
    UnsupportedMethod { method: String, available: Vec<String> },
    #[error("configuration must be a mapping, found {0}")]
    NotAMapping(&'static str),
    #[error("invalid value for option `{key}`: {source}")]
    InvalidOption { key: String, source: serde_json::Error },
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlError(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Configuration mapping for a confidence step
///
/// The only key the factory reads is `confidence_method`; every other entry is
/// an estimator-specific option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfidenceConfig {
    entries: Map<String, Value>,
}

impl ConfidenceConfig {
    /// Create a configuration selecting `method`
    pub fn new(method: impl Into<String>) -> Self {
        let mut entries = Map::new();
        entries.insert(CONFIDENCE_METHOD_KEY.to_string(), Value::String(method.into()));
        Self { entries }
    }

    /// Build from an arbitrary JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(ConfigError::NotAMapping(value_kind(&other))),
        }
    }

    /// Add or replace an option
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// The requested method name
    pub fn method(&self) -> Result<&str, ConfigError> {
        match self.entries.get(CONFIDENCE_METHOD_KEY) {
            None => Err(ConfigError::MissingMethod),
            Some(Value::String(name)) => Ok(name),
            Some(other) => Err(ConfigError::MethodNotString { found: value_kind(other) }),
        }
    }

    /// Deserialize an estimator option, `None` when the key is absent
    pub fn option<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        self.entries
            .get(key)
            .map(|value| {
                serde_json::from_value(value.clone()).map_err(|source| ConfigError::InvalidOption {
                    key: key.to_string(),
                    source,
                })
            })
            .transpose()
    }

    /// Raw entry lookup
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn entries(&self) -> &Map<String, Value> {
        &self.entries
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Configuration loader supporting YAML, TOML and JSON
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from file, picking the format from the extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ConfidenceConfig, ConfigError> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension.to_lowercase().as_str() {
            "yaml" | "yml" => Self::load_yaml(path),
            "toml" => Self::load_toml(path),
            "json" => Self::load_json(path),
            _ => Err(ConfigError::UnsupportedFormat(extension.to_string())),
        }
    }

    /// Load configuration from YAML file
    pub fn load_yaml<P: AsRef<Path>>(path: P) -> Result<ConfidenceConfig, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from TOML file
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<ConfidenceConfig, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from JSON file
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<ConfidenceConfig, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<ConfidenceConfig, ConfigError> {
        let value: Value = serde_yaml::from_str(content)?;
        ConfidenceConfig::from_value(value)
    }

    pub fn from_toml_str(content: &str) -> Result<ConfidenceConfig, ConfigError> {
        let value: Value = toml::from_str(content)?;
        ConfidenceConfig::from_value(value)
    }

    pub fn from_json_str(content: &str) -> Result<ConfidenceConfig, ConfigError> {
        let value: Value = serde_json::from_str(content)?;
        ConfidenceConfig::from_value(value)
    }
}
