//! `apitree build` - documentation markup straight to Go source

use crate::config::ApitreeConfig;
use crate::{compile, extract};
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// Run both stages in memory.
pub fn run(markup: &Path, config: &ApitreeConfig) -> Result<String> {
    let mapping = extract::extract_file(markup, &config.extract)?;
    debug!(endpoints = mapping.len(), "extraction finished");

    compile::generate(&mapping, &config.compile)
}
