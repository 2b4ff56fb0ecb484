#![allow(non_snake_case)]

use super::*;
use crate::model::ParamDescriptor;
use test_case::test_case;

fn mapping(paths: &[&str]) -> FlatMapping {
    let mut mapping = FlatMapping::new();
    for path in paths {
        mapping.insert(*path, Vec::new());
    }
    mapping
}

#[test]
fn compile___single_endpoint___builds_leaf_and_lookup() {
    let json = r#"{"ns/a/list": [{"name":"limit","type":"integer","desc":"max rows"}]}"#;
    let mapping = FlatMapping::from_json(json).unwrap();

    let compiled = compile(&mapping, &CompileOptions::default()).unwrap();

    let a = compiled.trie.root().child("a").unwrap().as_branch().unwrap();
    let leaf = a.child("list").unwrap().as_leaf().unwrap();
    assert_eq!(leaf.url, "ns/a/list");
    assert_eq!(leaf.opid, "AList");
    assert_eq!(leaf.params.len(), 1);
    assert_eq!(leaf.params[0].name, "limit");
    assert_eq!(compiled.lookup.get("a/list"), Some("AList"));
}

#[test]
fn compile___lookup_table___follows_mapping_order() {
    let mapping = mapping(&["ns/b/z", "ns/a/y", "ns/b/a"]);

    let compiled = compile(&mapping, &CompileOptions::default()).unwrap();

    let entries: Vec<_> = compiled.lookup.iter().collect();
    assert_eq!(
        entries,
        vec![("b/z", "BZ"), ("a/y", "AY"), ("b/a", "BA")]
    );
}

#[test]
fn compile___leaf_count___equals_endpoint_count() {
    let mapping = mapping(&[
        "/v1/cryptocurrency/map",
        "/v1/cryptocurrency/info",
        "/v1/cryptocurrency/quotes/latest",
        "/v2/tools/price-conversion",
        "/v1/key/info",
    ]);

    let compiled = compile(&mapping, &CompileOptions::default()).unwrap();

    assert_eq!(compiled.trie.leaf_count(), 5);
    assert_eq!(compiled.lookup.len(), 5);
}

#[test]
fn compile___endpoints___yields_records_in_mapping_order() {
    let mapping = mapping(&["ns/b/z", "ns/a/x", "ns/b/y"]);

    let compiled = compile(&mapping, &CompileOptions::default()).unwrap();

    let urls: Vec<_> = compiled.endpoints().map(|r| r.url.as_str()).collect();
    assert_eq!(urls, vec!["ns/b/z", "ns/a/x", "ns/b/y"]);
}

#[test_case(CollisionPolicy::Accept)]
#[test_case(CollisionPolicy::Warn)]
fn compile___identifier_collision_tolerated___keeps_both(policy: CollisionPolicy) {
    let mapping = mapping(&["ns/a-b/c", "ns/a/b-c"]);
    let options = CompileOptions::default().with_collision_policy(policy);

    let compiled = compile(&mapping, &options).unwrap();

    assert_eq!(compiled.lookup.get("a-b/c"), Some("ABC"));
    assert_eq!(compiled.lookup.get("a/b-c"), Some("ABC"));
    assert_eq!(compiled.trie.leaf_count(), 2);
}

#[test]
fn compile___identifier_collision_with_error_policy___fails() {
    let mapping = mapping(&["ns/a-b/c", "ns/a/b-c"]);
    let options = CompileOptions::default().with_collision_policy(CollisionPolicy::Error);

    let err = compile(&mapping, &options).unwrap_err();

    match err {
        CompileError::IdentifierCollision {
            identifier,
            first,
            second,
        } => {
            assert_eq!(identifier, "ABC");
            assert_eq!(first, "ns/a-b/c");
            assert_eq!(second, "ns/a/b-c");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn compile___endpoint_at_namespace_path___fails() {
    let mapping = mapping(&["ns/a/b", "ns/a"]);

    let err = compile(&mapping, &CompileOptions::default()).unwrap_err();

    assert!(err.is_shape_conflict());
}

#[test]
fn compile___same_short_path_in_two_namespaces___fails() {
    let mapping = mapping(&["x/a/b", "y/a/b"]);

    let err = compile(&mapping, &CompileOptions::default()).unwrap_err();

    assert!(matches!(err, CompileError::DuplicateEndpoint { .. }));
}

#[test]
fn compile___empty_mapping___produces_empty_tree() {
    let compiled = compile(&FlatMapping::new(), &CompileOptions::default()).unwrap();

    assert!(compiled.lookup.is_empty());
    assert!(compiled.trie.root().is_empty());
}

#[test]
fn compile___parameters___keep_declaration_order() {
    let mut mapping = FlatMapping::new();
    mapping.insert(
        "ns/a/list",
        vec![
            ParamDescriptor::new("start", "integer", "offset"),
            ParamDescriptor::new("limit", "integer", "rows"),
            ParamDescriptor::new("sort", "string", "order").with_default("id"),
        ],
    );

    let compiled = compile(&mapping, &CompileOptions::default()).unwrap();

    let names: Vec<_> = compiled
        .endpoint("a/list")
        .unwrap()
        .params
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["start", "limit", "sort"]);
}
