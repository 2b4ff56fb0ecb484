//! `apitree compile` - interchange JSON to Go source

use anyhow::{Context, Result};
use apitree_core::{CompileOptions, FlatMapping, compile, render_go};
use std::path::Path;

/// Compile an interchange file into Go source.
pub fn run(mapping: &Path, options: &CompileOptions) -> Result<String> {
    let mapping = load_mapping(mapping)?;
    generate(&mapping, options)
}

/// Compile an in-memory mapping into Go source.
pub fn generate(mapping: &FlatMapping, options: &CompileOptions) -> Result<String> {
    let compiled = compile(mapping, options).context("Failed to compile endpoint mapping")?;
    Ok(render_go(&compiled, options))
}

/// Read and parse an interchange file.
pub fn load_mapping(path: &Path) -> Result<FlatMapping> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read interchange file: {path:?}"))?;

    FlatMapping::from_json(&json).with_context(|| format!("Failed to parse {path:?}"))
}
