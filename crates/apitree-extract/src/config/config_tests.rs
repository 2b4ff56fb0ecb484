#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn ExtractConfig___default___is_lenient() {
    let config = ExtractConfig::default();

    assert_eq!(config.mode, ExtractMode::Lenient);
    assert_eq!(config.selectors.operation, "operation");
    assert_eq!(config.selectors.default, ".param-default");
}

#[test]
fn ExtractConfig___partial_json___keeps_default_selectors() {
    let json = r#"{"mode": "strict", "selectors": {"url": "code.path"}}"#;

    let config: ExtractConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.mode, ExtractMode::Strict);
    assert_eq!(config.selectors.url, "code.path");
    assert_eq!(config.selectors.params_list, "params-list");
}

#[test]
fn Selectors___type_field___uses_type_key() {
    let selectors: Selectors = serde_json::from_str(r#"{"type": "span.kind"}"#).unwrap();

    assert_eq!(selectors.ty, "span.kind");
}

#[test_case("lenient", ExtractMode::Lenient)]
#[test_case("strict", ExtractMode::Strict)]
#[test_case("Strict", ExtractMode::Strict)]
fn ExtractMode___from_str___parses(input: &str, expected: ExtractMode) {
    assert_eq!(input.parse::<ExtractMode>().unwrap(), expected);
}

#[test]
fn ExtractMode___from_str_invalid___fails() {
    assert!("loose".parse::<ExtractMode>().is_err());
}

#[test]
fn ExtractMode___display___round_trips() {
    assert_eq!(ExtractMode::Strict.to_string(), "strict");
    assert_eq!(ExtractMode::Lenient.to_string(), "lenient");
}
