//! Naming utilities for generated code.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `ns/foo-bar/baz` | [`synthesize_identifier`] | `FooBarBaz` |
//! | `time_start` | [`to_pascal_case`] | `TimeStart` |
//! | `word` | [`capitalize`] | `Word` |
//! | `integer` | [`map_param_type`] | `int64` |

/// Derive the type identifier for an endpoint path.
///
/// The path is split on `/` and `-`, the first piece (the namespace marker)
/// is dropped, and the remaining pieces are capitalized and concatenated.
/// Only the first letter of each piece changes.
///
/// # Examples
///
/// ```
/// use apitree_core::naming::synthesize_identifier;
///
/// assert_eq!(synthesize_identifier("ns/foo-bar/baz"), "FooBarBaz");
/// assert_eq!(synthesize_identifier("/v1/cryptocurrency/map"), "V1CryptocurrencyMap");
/// ```
pub fn synthesize_identifier(path: &str) -> String {
    path.split(['/', '-']).skip(1).map(capitalize).collect()
}

/// Convert a snake_case or kebab-case name to PascalCase.
///
/// # Examples
///
/// ```
/// use apitree_core::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("time_start"), "TimeStart");
/// assert_eq!(to_pascal_case("convert-id"), "ConvertId");
/// assert_eq!(to_pascal_case("limit"), "Limit");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split(['-', '_']).map(capitalize).collect()
}

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use apitree_core::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Map a documented parameter type to the Go type used in argument structs.
///
/// Unknown types pass through unchanged.
pub fn map_param_type(ty: &str) -> &str {
    match ty {
        "integer" => "int64",
        "boolean" => "bool",
        "number" => "float64",
        other => other,
    }
}
