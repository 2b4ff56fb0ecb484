//! Compile a flat mapping into a lookup table and namespace tree

use crate::config::{CollisionPolicy, CompileOptions};
use crate::error::{CompileError, CompileResult};
use crate::model::{FlatMapping, LeafRecord, LookupTable, ParamDescriptor, short_path};
use crate::naming::synthesize_identifier;
use crate::trie::ApiTrie;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Output of the compile stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledApi {
    /// Short path to identifier, in mapping order.
    pub lookup: LookupTable,

    /// Namespace tree of all endpoints.
    pub trie: ApiTrie,
}

impl CompiledApi {
    /// Leaf record for a short path.
    pub fn endpoint(&self, short_path: &str) -> Option<&LeafRecord> {
        self.trie.get(short_path)?.as_leaf()
    }

    /// Leaf records in mapping order.
    pub fn endpoints(&self) -> impl Iterator<Item = &LeafRecord> {
        self.lookup
            .iter()
            .filter_map(|(short_path, _)| self.endpoint(short_path))
    }
}

/// Build the lookup table and fold every endpoint into the namespace tree.
///
/// Each entry is decorated with its URL and synthesized identifier and keyed
/// by its short path before folding. Identifier collisions follow
/// [`CompileOptions::on_collision`]; shape conflicts always fail.
pub fn compile(mapping: &FlatMapping, options: &CompileOptions) -> CompileResult<CompiledApi> {
    let mut lookup = LookupTable::new();
    let mut trie = ApiTrie::new();
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (path, params) in mapping.iter() {
        let identifier = synthesize_identifier(path);
        let short = short_path(path);

        if let Some(first) = seen.get(&identifier) {
            check_collision(options.on_collision, &identifier, first, path)?;
        } else {
            seen.insert(identifier.clone(), path);
        }

        warn_repeated_params(path, params);

        debug!(path, short, identifier = %identifier, params = params.len(), "folding endpoint");

        lookup.push(short, identifier.clone());
        trie.insert(
            short,
            LeafRecord {
                url: path.to_string(),
                opid: identifier,
                params: params.to_vec(),
            },
        )?;
    }

    info!(
        endpoints = lookup.len(),
        namespaces = trie.root().len(),
        "compiled endpoint mapping"
    );

    Ok(CompiledApi { lookup, trie })
}

/// Repeated parameter names collapse to their last occurrence when rendered.
fn warn_repeated_params(path: &str, params: &[ParamDescriptor]) {
    for (i, param) in params.iter().enumerate() {
        if params[..i].iter().any(|earlier| earlier.name == param.name) {
            warn!(path, param = %param.name, "parameter listed more than once, keeping the last");
        }
    }
}

fn check_collision(
    policy: CollisionPolicy,
    identifier: &str,
    first: &str,
    second: &str,
) -> CompileResult<()> {
    match policy {
        CollisionPolicy::Accept => Ok(()),
        CollisionPolicy::Warn => {
            warn!(identifier, first, second, "identifier collision");
            Ok(())
        }
        CollisionPolicy::Error => Err(CompileError::IdentifierCollision {
            identifier: identifier.to_string(),
            first: first.to_string(),
            second: second.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "compile/compile_tests.rs"]
mod compile_tests;
