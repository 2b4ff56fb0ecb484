//! apitree-core - Compile a flat endpoint mapping into a namespace tree
//!
//! This crate provides the second stage of the apitree pipeline:
//! - [`FlatMapping`] and [`ParamDescriptor`] for the interchange format
//! - [`synthesize_identifier`] for deriving type names from endpoint paths
//! - [`ApiTrie`] for folding short paths into a namespace tree
//! - [`EmitEvent`] and [`TreeRenderer`] for walking and rendering the tree
//! - [`compile`] for running the whole stage with a [`CompileOptions`]

mod compile;
mod config;
mod emit;
mod error;
mod model;
pub mod naming;
mod trie;

pub use compile::{CompiledApi, compile};
pub use config::{CollisionPolicy, CompileOptions};
pub use emit::{
    EmitEvent, GoRenderer, OutlineRenderer, ROOT_LABEL, TreeRenderer, escape_go_string, render,
    render_go, render_outline,
};
pub use error::{CompileError, CompileResult};
pub use model::{FlatMapping, LeafRecord, LookupTable, ParamDescriptor, short_path};
pub use naming::synthesize_identifier;
pub use trie::{ApiTrie, Branch, NodeKind};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ApiTrie, CollisionPolicy, CompileError, CompileOptions, CompileResult, CompiledApi,
        FlatMapping, LeafRecord, NodeKind, ParamDescriptor, compile,
    };
}
