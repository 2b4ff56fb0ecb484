//! Extraction configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How required extraction points that match more than once are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractMode {
    /// Take the first match and ignore the rest (default)
    #[default]
    Lenient,
    /// Fail when a required point matches more than once
    Strict,
}

impl FromStr for ExtractMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lenient" => Ok(ExtractMode::Lenient),
            "strict" => Ok(ExtractMode::Strict),
            other => Err(format!(
                "invalid extract mode '{other}': expected 'lenient' or 'strict'"
            )),
        }
    }
}

impl fmt::Display for ExtractMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractMode::Lenient => write!(f, "lenient"),
            ExtractMode::Strict => write!(f, "strict"),
        }
    }
}

/// CSS selectors for every extraction point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// One documented operation
    pub operation: String,

    /// Endpoint path inside an operation
    pub url: String,

    /// Parameter table inside an operation
    pub params_list: String,

    /// One parameter inside the table
    pub param: String,

    /// Parameter name
    pub name: String,

    /// Parameter type
    #[serde(rename = "type")]
    pub ty: String,

    /// Parameter description
    pub description: String,

    /// Parameter default value
    pub default: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            operation: "operation".to_string(),
            url: ".operation-api-url-path".to_string(),
            params_list: "params-list".to_string(),
            param: ".param".to_string(),
            name: ".param-name-wrap".to_string(),
            ty: ".param-type".to_string(),
            description: ".param-description".to_string(),
            default: ".param-default".to_string(),
        }
    }
}

/// Extraction settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    pub mode: ExtractMode,
    pub selectors: Selectors,
}

impl ExtractConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: ExtractMode) -> Self {
        self.mode = mode;
        self
    }
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
