//! Data model shared by both pipeline stages.
//!
//! - [`ParamDescriptor`]: one documented parameter of an endpoint
//! - [`FlatMapping`]: endpoint path to ordered parameter list, the interchange format
//! - [`LeafRecord`]: endpoint metadata stored at a leaf of the namespace tree
//! - [`LookupTable`]: short path to synthesized identifier
//!
//! Order is significant everywhere: parameters keep declaration order and
//! endpoints keep the order in which they were first inserted.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single documented parameter.
///
/// Field names follow the interchange format: `name`, `type`, `desc`, and
/// the optional `defa`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDescriptor {
    /// Parameter name as documented.
    pub name: String,

    /// Documented type (e.g. `integer`, `string`).
    #[serde(rename = "type")]
    pub ty: String,

    /// Free-form description.
    pub desc: String,

    /// Default value, present only when the documentation names exactly one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defa: Option<String>,
}

impl ParamDescriptor {
    /// Create a descriptor without a default value.
    pub fn new(name: impl Into<String>, ty: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            desc: desc.into(),
            defa: None,
        }
    }

    /// Set the default value.
    pub fn with_default(mut self, defa: impl Into<String>) -> Self {
        self.defa = Some(defa.into());
        self
    }
}

/// Insertion-ordered mapping from endpoint path to its parameters.
///
/// Re-inserting an existing path replaces its parameters but keeps the
/// position of the first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatMapping {
    entries: Vec<(String, Vec<ParamDescriptor>)>,
}

impl FlatMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert parameters for a path, returning the replaced list if the path existed.
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        params: Vec<ParamDescriptor>,
    ) -> Option<Vec<ParamDescriptor>> {
        let path = path.into();
        match self.entries.iter_mut().find(|(p, _)| *p == path) {
            Some((_, existing)) => Some(std::mem::replace(existing, params)),
            None => {
                self.entries.push((path, params));
                None
            }
        }
    }

    /// Parameters recorded for a path.
    pub fn get(&self, path: &str) -> Option<&[ParamDescriptor]> {
        self.entries
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, params)| params.as_slice())
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ParamDescriptor])> {
        self.entries
            .iter()
            .map(|(path, params)| (path.as_str(), params.as_slice()))
    }

    /// Iterate paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(path, _)| path.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse the interchange document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Render the interchange document with 2-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for FlatMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (path, params) in &self.entries {
            map.serialize_entry(path, params)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FlatMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FlatMappingVisitor)
    }
}

struct FlatMappingVisitor;

impl<'de> Visitor<'de> for FlatMappingVisitor {
    type Value = FlatMapping;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from endpoint path to a list of parameters")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut mapping = FlatMapping::new();
        while let Some((path, params)) = access.next_entry::<String, Vec<ParamDescriptor>>()? {
            mapping.insert(path, params);
        }
        Ok(mapping)
    }
}

/// Strip the leading namespace segment from an endpoint path.
///
/// ```
/// use apitree_core::short_path;
///
/// assert_eq!(short_path("/v1/cryptocurrency/map"), "v1/cryptocurrency/map");
/// assert_eq!(short_path("ns/a/list"), "a/list");
/// assert_eq!(short_path("ns"), "");
/// ```
pub fn short_path(path: &str) -> &str {
    path.split_once('/').map(|(_, rest)| rest).unwrap_or("")
}

/// Endpoint metadata stored at a leaf of the namespace tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafRecord {
    /// Full endpoint path, namespace segment included.
    pub url: String,

    /// Synthesized type identifier.
    pub opid: String,

    /// Parameters in declaration order.
    pub params: Vec<ParamDescriptor>,
}

/// Flat table from short path to synthesized identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    entries: Vec<(String, String)>,
}

impl LookupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Duplicate keys are kept as-is.
    pub fn push(&mut self, short_path: impl Into<String>, identifier: impl Into<String>) {
        self.entries.push((short_path.into(), identifier.into()));
    }

    /// Identifier recorded for a short path (first entry wins).
    pub fn get(&self, short_path: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(path, _)| path == short_path)
            .map(|(_, identifier)| identifier.as_str())
    }

    /// Iterate `(short_path, identifier)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(path, identifier)| (path.as_str(), identifier.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
