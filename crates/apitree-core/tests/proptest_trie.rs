//! Property-based tests for path folding and identifier synthesis
//!
//! Paths are generated with a fixed depth so that no endpoint can sit on
//! another endpoint's namespace.

use apitree_core::{CompileOptions, FlatMapping, NodeKind, compile, synthesize_identifier};
use proptest::prelude::*;

// Strategy: a single path segment
fn arb_segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,5}"
}

// Strategy: unique segment lists of a fixed depth, in generation order
fn arb_paths(depth: usize) -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(arb_segment(), depth), 1..24).prop_map(|paths| {
        let mut unique: Vec<Vec<String>> = Vec::new();
        for path in paths {
            if !unique.contains(&path) {
                unique.push(path);
            }
        }
        unique
    })
}

fn mapping_for(paths: &[Vec<String>]) -> FlatMapping {
    let mut mapping = FlatMapping::new();
    for segments in paths {
        mapping.insert(format!("ns/{}", segments.join("/")), Vec::new());
    }
    mapping
}

fn options() -> CompileOptions {
    CompileOptions::default().with_collision_policy(apitree_core::CollisionPolicy::Accept)
}

proptest! {
    /// Property: every endpoint becomes exactly one leaf
    #[test]
    fn proptest_leaf_count_equals_endpoint_count(paths in arb_paths(3)) {
        let mapping = mapping_for(&paths);

        let compiled = compile(&mapping, &options()).expect("fixed-depth paths never conflict");

        prop_assert_eq!(compiled.trie.leaf_count(), paths.len());
        prop_assert_eq!(compiled.lookup.len(), paths.len());
    }

    /// Property: root children appear in order of first use
    #[test]
    fn proptest_root_children_follow_first_insertion(paths in arb_paths(2)) {
        let mapping = mapping_for(&paths);

        let compiled = compile(&mapping, &options()).expect("fixed-depth paths never conflict");

        let mut expected: Vec<&str> = Vec::new();
        for segments in &paths {
            if !expected.contains(&segments[0].as_str()) {
                expected.push(&segments[0]);
            }
        }
        let actual: Vec<&str> = compiled.trie.root().children().map(|(s, _)| s).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Property: paths sharing a prefix share the branch nodes of that prefix
    #[test]
    fn proptest_shared_prefix_shares_branches(
        prefix in prop::collection::vec(arb_segment(), 1..4),
        left in arb_segment(),
        right in arb_segment(),
    ) {
        prop_assume!(left != right);
        let mut mapping = FlatMapping::new();
        mapping.insert(format!("ns/{}/{left}", prefix.join("/")), Vec::new());
        mapping.insert(format!("ns/{}/{right}", prefix.join("/")), Vec::new());

        let compiled = compile(&mapping, &options()).expect("sibling endpoints never conflict");

        let shared = compiled.trie.get(&prefix.join("/"));
        let branch = match shared {
            Some(NodeKind::Branch(branch)) => branch,
            other => return Err(TestCaseError::fail(format!("expected branch, got {other:?}"))),
        };
        prop_assert_eq!(branch.len(), 2);
        prop_assert!(branch.child(&left).and_then(NodeKind::as_leaf).is_some());
        prop_assert!(branch.child(&right).and_then(NodeKind::as_leaf).is_some());
    }

    /// Property: identifier synthesis is a pure function of the path
    #[test]
    fn proptest_identifier_is_deterministic(path in "[a-z/-]{0,40}") {
        prop_assert_eq!(synthesize_identifier(&path), synthesize_identifier(&path));
    }

    /// Property: identifiers never contain separators
    #[test]
    fn proptest_identifier_has_no_separators(path in "[a-z]{1,4}(/[a-z-]{0,6}){0,5}") {
        let identifier = synthesize_identifier(&path);

        prop_assert!(!identifier.contains('/'));
        prop_assert!(!identifier.contains('-'));
    }
}
