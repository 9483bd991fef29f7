use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::flags::{is_false, string_or_number, truthy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupType {
    #[default]
    Values,
    Filter,
}

/// A member of a values-type group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupValue {
    #[serde(deserialize_with = "string_or_number")]
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl GroupValue {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: None,
        }
    }
}

/// One group in a partition of discrete values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(rename = "type", default)]
    pub group_type: GroupType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<GroupValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(default, deserialize_with = "truthy", skip_serializing_if = "is_false")]
    pub uncomputable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Group {
    pub fn with_values<I, S>(name: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            group_type: GroupType::Values,
            values: keys.into_iter().map(GroupValue::new).collect(),
            filter: None,
            uncomputable: false,
            color: None,
        }
    }
}

/// A named partition of discrete values into groups.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl GroupSet {
    pub fn new(name: impl Into<String>, groups: Vec<Group>) -> Self {
        Self {
            name: Some(name.into()),
            groups,
        }
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}
