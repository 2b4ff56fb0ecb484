//! Namespace tree built by folding short paths.
//!
//! Every node is either a [`Branch`] (a namespace segment with ordered
//! children) or a [`LeafRecord`] (an endpoint). A key never holds both:
//! inserting an endpoint that would turn a branch into a leaf, or a leaf into
//! a branch, fails with a [`CompileError`].
//!
//! Children keep the order in which their segment was first created.

use crate::error::{CompileError, CompileResult};
use crate::model::LeafRecord;

/// A node of the namespace tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Namespace segment with children.
    Branch(Branch),

    /// Endpoint.
    Leaf(LeafRecord),
}

impl NodeKind {
    pub fn as_branch(&self) -> Option<&Branch> {
        match self {
            NodeKind::Branch(branch) => Some(branch),
            NodeKind::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&LeafRecord> {
        match self {
            NodeKind::Branch(_) => None,
            NodeKind::Leaf(record) => Some(record),
        }
    }
}

/// Ordered children of a namespace segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Branch {
    children: Vec<(String, NodeKind)>,
}

impl Branch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate children in first-insertion order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &NodeKind)> {
        self.children
            .iter()
            .map(|(segment, node)| (segment.as_str(), node))
    }

    /// Direct child for a segment.
    pub fn child(&self, segment: &str) -> Option<&NodeKind> {
        self.position(segment).map(|idx| &self.children[idx].1)
    }

    /// Node reached by walking a `/`-separated path from this branch.
    pub fn get(&self, path: &str) -> Option<&NodeKind> {
        let mut segments = path.split('/');
        let mut node = self.child(segments.next()?)?;
        for segment in segments {
            node = node.as_branch()?.child(segment)?;
        }
        Some(node)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of endpoints below this branch.
    pub fn leaf_count(&self) -> usize {
        self.children
            .iter()
            .map(|(_, node)| match node {
                NodeKind::Branch(branch) => branch.leaf_count(),
                NodeKind::Leaf(_) => 1,
            })
            .sum()
    }

    /// Place an endpoint at a short path.
    ///
    /// Branches for all but the last segment are created on first use and
    /// reused afterwards. The last segment receives the leaf.
    pub fn insert(&mut self, short_path: &str, record: LeafRecord) -> CompileResult<()> {
        let (parents, last) = match short_path.rsplit_once('/') {
            Some((parents, last)) => (Some(parents), last),
            None => (None, short_path),
        };

        let mut node = self;
        if let Some(parents) = parents {
            for segment in parents.split('/') {
                node = node.branch_mut(segment, short_path)?;
            }
        }
        node.place_leaf(last, record, short_path)
    }

    fn position(&self, segment: &str) -> Option<usize> {
        self.children.iter().position(|(s, _)| s == segment)
    }

    fn branch_mut(&mut self, segment: &str, short_path: &str) -> CompileResult<&mut Branch> {
        let idx = match self.position(segment) {
            Some(idx) => idx,
            None => {
                self.children
                    .push((segment.to_string(), NodeKind::Branch(Branch::new())));
                self.children.len() - 1
            }
        };

        match &mut self.children[idx].1 {
            NodeKind::Branch(branch) => Ok(branch),
            NodeKind::Leaf(existing) => Err(CompileError::BranchThroughLeaf {
                path: short_path.to_string(),
                endpoint: existing.url.clone(),
            }),
        }
    }

    fn place_leaf(
        &mut self,
        segment: &str,
        record: LeafRecord,
        short_path: &str,
    ) -> CompileResult<()> {
        match self.position(segment).map(|idx| &self.children[idx].1) {
            None => {
                self.children
                    .push((segment.to_string(), NodeKind::Leaf(record)));
                Ok(())
            }
            Some(NodeKind::Branch(_)) => Err(CompileError::LeafOverBranch {
                path: short_path.to_string(),
            }),
            Some(NodeKind::Leaf(existing)) => Err(CompileError::DuplicateEndpoint {
                path: short_path.to_string(),
                first: existing.url.clone(),
                second: record.url,
            }),
        }
    }
}

/// Namespace tree rooted at an implicit `root` branch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiTrie {
    root: Branch,
}

impl ApiTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold `(short_path, record)` pairs in order.
    pub fn from_records<'a, I>(records: I) -> CompileResult<Self>
    where
        I: IntoIterator<Item = (&'a str, LeafRecord)>,
    {
        let mut trie = Self::new();
        for (short_path, record) in records {
            trie.insert(short_path, record)?;
        }
        Ok(trie)
    }

    pub fn insert(&mut self, short_path: &str, record: LeafRecord) -> CompileResult<()> {
        self.root.insert(short_path, record)
    }

    pub fn root(&self) -> &Branch {
        &self.root
    }

    pub fn get(&self, short_path: &str) -> Option<&NodeKind> {
        self.root.get(short_path)
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }
}
