use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Default header line placed on every generated class.
pub const DEFAULT_HEADER: &str =
    "Generated by MethodScope. (https://github.com/skydoves/MethodScope).";

/// Presentation options for generated classes.
///
/// None of these affect which methods are generated; they only decorate the
/// output. Loaded from YAML, e.g.:
///
/// ```yaml
/// header: "Generated code, do not edit."
/// modifiers: [public, final]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Header doc line for generated classes. `None` omits it.
    pub header: Option<String>,
    /// Modifiers applied to every generated class.
    pub modifiers: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            header: Some(DEFAULT_HEADER.to_string()),
            modifiers: vec!["public".to_string()],
        }
    }
}

impl GeneratorConfig {
    /// Parse a YAML document. An empty document yields the defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ConfigError::Load(e.to_string()))
    }

    /// Load a YAML file. A missing file yields the defaults.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No generator config file, using defaults");
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Load(e.to_string()))?;
        Self::from_yaml_str(&content)
    }
}
