//! Tree emission.
//!
//! Emission is split in two:
//!
//! ```text
//! ApiTrie
//!     ↓
//!  [events()]   pure walk, child insertion order
//!     ↓
//!  EmitEvent stream
//!     ↓
//!  ├─→ [GoRenderer]      → Go source (lookup table + ApiNode tree)
//!  └─→ [OutlineRenderer] → human-readable outline
//! ```
//!
//! Renderers only see [`EmitEvent`]s through the [`TreeRenderer`] trait, so
//! a new output format never re-implements the traversal.

mod go;
mod outline;

pub use go::{GoRenderer, render_go};
pub use outline::{OutlineRenderer, render_outline};

use crate::model::LeafRecord;
use crate::trie::{ApiTrie, Branch, NodeKind};

/// Label of the implicit top-level node.
pub const ROOT_LABEL: &str = "root";

/// One step of a tree walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitEvent<'a> {
    /// A branch starts; its children follow.
    EnterBranch { label: &'a str, depth: usize },

    /// An endpoint.
    Leaf {
        label: &'a str,
        record: &'a LeafRecord,
        depth: usize,
    },

    /// The most recently entered branch ends.
    ExitBranch { label: &'a str, depth: usize },
}

impl ApiTrie {
    /// Walk the tree depth-first, starting with the root branch at depth 0.
    pub fn events(&self) -> Vec<EmitEvent<'_>> {
        let mut events = Vec::new();
        walk(ROOT_LABEL, self.root(), 0, &mut events);
        events
    }
}

fn walk<'a>(label: &'a str, branch: &'a Branch, depth: usize, events: &mut Vec<EmitEvent<'a>>) {
    events.push(EmitEvent::EnterBranch { label, depth });
    for (segment, node) in branch.children() {
        match node {
            NodeKind::Branch(child) => walk(segment, child, depth + 1, events),
            NodeKind::Leaf(record) => events.push(EmitEvent::Leaf {
                label: segment,
                record,
                depth: depth + 1,
            }),
        }
    }
    events.push(EmitEvent::ExitBranch { label, depth });
}

/// Receives the events of a tree walk.
pub trait TreeRenderer {
    fn enter_branch(&mut self, label: &str, depth: usize);

    fn leaf(&mut self, label: &str, record: &LeafRecord, depth: usize);

    fn exit_branch(&mut self, label: &str, depth: usize);
}

/// Feed every event of `trie` to `renderer`.
pub fn render<R: TreeRenderer + ?Sized>(trie: &ApiTrie, renderer: &mut R) {
    for event in trie.events() {
        match event {
            EmitEvent::EnterBranch { label, depth } => renderer.enter_branch(label, depth),
            EmitEvent::Leaf {
                label,
                record,
                depth,
            } => renderer.leaf(label, record, depth),
            EmitEvent::ExitBranch { label, depth } => renderer.exit_branch(label, depth),
        }
    }
}

/// Escape text for use inside a double-quoted Go string literal.
///
/// # Examples
///
/// ```
/// use apitree_core::escape_go_string;
///
/// assert_eq!(escape_go_string(r#"He said "hi""#), r#"He said \"hi\""#);
/// ```
pub fn escape_go_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}
