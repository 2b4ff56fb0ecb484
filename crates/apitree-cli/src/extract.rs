//! `apitree extract` - documentation markup to interchange JSON

use anyhow::{Context, Result};
use apitree_core::FlatMapping;
use apitree_extract::{ExtractConfig, Extractor};
use std::path::Path;

/// Scrape a markup file into the pretty-printed interchange document.
pub fn run(markup: &Path, config: &ExtractConfig) -> Result<String> {
    let mapping = extract_file(markup, config)?;

    let mut json = mapping
        .to_json_pretty()
        .context("Failed to serialize interchange document")?;
    json.push('\n');

    Ok(json)
}

/// Scrape a markup file into a flat mapping.
pub fn extract_file(markup: &Path, config: &ExtractConfig) -> Result<FlatMapping> {
    let html = std::fs::read_to_string(markup)
        .with_context(|| format!("Failed to read markup: {markup:?}"))?;

    let extractor = Extractor::new(config).context("Invalid extraction config")?;

    extractor
        .extract(&html)
        .with_context(|| format!("Failed to extract {markup:?}"))
}
