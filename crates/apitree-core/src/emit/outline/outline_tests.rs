#![allow(non_snake_case)]

use super::*;

fn record(url: &str) -> LeafRecord {
    LeafRecord {
        url: url.to_string(),
        opid: String::new(),
        params: Vec::new(),
    }
}

#[test]
fn render_outline___nested_tree___indents_three_spaces_per_level() {
    let mut trie = ApiTrie::new();
    trie.insert("v1/cryptocurrency/map", record("/v1/cryptocurrency/map"))
        .unwrap();
    trie.insert("v1/key/info", record("/v1/key/info")).unwrap();

    let outline = render_outline(&trie);

    let expected = "╰ root\n   ╰ v1\n      ╰ cryptocurrency\n         ╰ map → /v1/cryptocurrency/map\n      ╰ key\n         ╰ info → /v1/key/info\n";
    assert_eq!(outline, expected);
}

#[test]
fn render_outline___empty_tree___prints_root_only() {
    assert_eq!(render_outline(&ApiTrie::new()), "╰ root\n");
}
