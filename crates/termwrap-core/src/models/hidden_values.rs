use std::collections::BTreeSet;

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::flags::is_truthy;

/// Value keys excluded from an analysis, serialized as `{"key": 1}`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HiddenValues(BTreeSet<String>);

impl HiddenValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hide(&mut self, key: impl Into<String>) {
        self.0.insert(key.into());
    }

    pub fn is_hidden(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for HiddenValues {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl Serialize for HiddenValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for key in &self.0 {
            map.serialize_entry(key, &1)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for HiddenValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = std::collections::BTreeMap::<String, Value>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter(|(_, v)| is_truthy(v))
            .map(|(k, _)| k)
            .collect())
    }
}
