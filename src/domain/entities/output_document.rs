//! Output Document Entity
//!
//! The aggregated logical-name → environment mapping written to `vars.json`.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Environment variables of one function, sorted by name.
pub type EnvironmentMap = BTreeMap<String, String>;

/// Environment maps keyed by logical id, in enumeration order.
///
/// Serializes as a JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputDocument {
    entries: Vec<(String, EnvironmentMap)>,
}

impl OutputDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a function's environment. Empty maps are kept.
    pub fn insert(&mut self, logical_id: impl Into<String>, environment: EnvironmentMap) {
        self.entries.push((logical_id.into(), environment));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, logical_id: &str) -> Option<&EnvironmentMap> {
        self.entries
            .iter()
            .find(|(id, _)| id == logical_id)
            .map(|(_, env)| env)
    }

    pub fn logical_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Pretty-printed JSON with a two-space indent and no trailing newline.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for OutputDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (logical_id, environment) in &self.entries {
            map.serialize_entry(logical_id, environment)?;
        }
        map.end()
    }
}

impl FromIterator<(String, EnvironmentMap)> for OutputDocument {
    fn from_iter<I: IntoIterator<Item = (String, EnvironmentMap)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
