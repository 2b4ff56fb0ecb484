//! Compile configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What to do when two endpoint paths synthesize the same identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Keep both entries silently
    Accept,
    /// Keep both entries and log a warning (default)
    #[default]
    Warn,
    /// Abort the run
    Error,
}

impl FromStr for CollisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "accept" => Ok(CollisionPolicy::Accept),
            "warn" => Ok(CollisionPolicy::Warn),
            "error" => Ok(CollisionPolicy::Error),
            other => Err(format!(
                "invalid collision policy '{other}': expected 'accept', 'warn' or 'error'"
            )),
        }
    }
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionPolicy::Accept => write!(f, "accept"),
            CollisionPolicy::Warn => write!(f, "warn"),
            CollisionPolicy::Error => write!(f, "error"),
        }
    }
}

/// Options for the compile stage and Go rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    /// Go package name of the generated file
    pub package: String,

    /// Tool name written into the generated-code header
    pub generator: String,

    /// Identifier collision handling
    pub on_collision: CollisionPolicy,

    /// Also emit one argument struct per endpoint
    pub emit_arg_structs: bool,
}

fn default_package() -> String {
    "main".to_string()
}

fn default_generator() -> String {
    "apitree".to_string()
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            package: default_package(),
            generator: default_generator(),
            on_collision: CollisionPolicy::default(),
            emit_arg_structs: false,
        }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.on_collision = policy;
        self
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    pub fn with_arg_structs(mut self, enabled: bool) -> Self {
        self.emit_arg_structs = enabled;
        self
    }
}
