//! Plain-text outline of the namespace tree

use super::{TreeRenderer, render};
use crate::model::LeafRecord;
use crate::trie::ApiTrie;

const INDENT: &str = "   ";

/// Renders one line per node: `╰ label` for namespaces, `╰ label → url` for endpoints.
#[derive(Debug, Default)]
pub struct OutlineRenderer {
    out: String,
}

impl OutlineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_output(self) -> String {
        self.out
    }
}

impl TreeRenderer for OutlineRenderer {
    fn enter_branch(&mut self, label: &str, depth: usize) {
        self.out
            .push_str(&format!("{}╰ {label}\n", INDENT.repeat(depth)));
    }

    fn leaf(&mut self, label: &str, record: &LeafRecord, depth: usize) {
        self.out.push_str(&format!(
            "{}╰ {label} → {}\n",
            INDENT.repeat(depth),
            record.url
        ));
    }

    fn exit_branch(&mut self, _label: &str, _depth: usize) {}
}

/// Render the outline of a whole tree.
pub fn render_outline(trie: &ApiTrie) -> String {
    let mut renderer = OutlineRenderer::new();
    render(trie, &mut renderer);
    renderer.into_output()
}

#[cfg(test)]
#[path = "outline/outline_tests.rs"]
mod outline_tests;
