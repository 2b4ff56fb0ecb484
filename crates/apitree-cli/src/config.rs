//! apitree.toml configuration

use anyhow::{Context, Result};
use apitree_core::CompileOptions;
use apitree_extract::ExtractConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// apitree.toml structure
///
/// ```toml
/// [compile]
/// package = "main"
/// on_collision = "warn"
/// emit_arg_structs = false
///
/// [extract]
/// mode = "lenient"
///
/// [extract.selectors]
/// url = ".operation-api-url-path"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApitreeConfig {
    pub compile: CompileOptions,
    pub extract: ExtractConfig,
}

impl ApitreeConfig {
    /// Load configuration from a file, or defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }
}
