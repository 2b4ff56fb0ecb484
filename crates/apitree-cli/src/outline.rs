//! `apitree outline` - print the namespace tree

use crate::compile::load_mapping;
use anyhow::{Context, Result};
use apitree_core::{CompileOptions, compile, render_outline};
use std::path::Path;

pub fn run(mapping: &Path, options: &CompileOptions) -> Result<String> {
    let mapping = load_mapping(mapping)?;
    let compiled = compile(&mapping, options).context("Failed to compile endpoint mapping")?;

    Ok(render_outline(&compiled.trie))
}
