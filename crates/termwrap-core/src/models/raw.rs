//! Raw, partially specified input to resolution.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::flags::{is_false, truthy};
use super::groupset::GroupSet;
use super::hidden_values::HiddenValues;
use super::query::{Mode, Shape};
use super::term::Term;
use crate::errors::{ResolveError, ResolveResult};

/// The pre-`q.type` way of selecting a group set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LegacyGroupSetting {
    #[serde(default, deserialize_with = "truthy", skip_serializing_if = "is_false")]
    pub inuse: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predefined_groupset_idx: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customset: Option<GroupSet>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A query as a caller or saved state supplies it. Only the dispatch
/// fields are typed; shape-specific fields wait in `fields` until the
/// shape resolver claims them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawQuery {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub query_type: Option<Shape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(rename = "hiddenValues", default, skip_serializing_if = "Option::is_none")]
    pub hidden_values: Option<HiddenValues>,
    #[serde(rename = "isAtomic", default, skip_serializing_if = "Option::is_none")]
    pub is_atomic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groupsetting: Option<LegacyGroupSetting>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl RawQuery {
    pub fn of_type(query_type: Shape) -> Self {
        Self {
            query_type: Some(query_type),
            ..Default::default()
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn has(&self, key: &str) -> bool {
        self.fields.get(key).is_some_and(|v| !v.is_null())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    /// Remove `key` and deserialize it. Absent and `null` both yield `None`.
    pub fn take<T: DeserializeOwned>(&mut self, key: &str) -> ResolveResult<Option<T>> {
        match self.fields.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| ResolveError::schema(format!("invalid q.{key}: {e}"))),
        }
    }

    /// Fill keys this query does not set from `defaults`. Keys already
    /// present, including dispatch fields, are left alone.
    pub fn merge_defaults(&mut self, defaults: &Map<String, Value>) -> ResolveResult<()> {
        let defaults: RawQuery = serde_json::from_value(Value::Object(defaults.clone()))
            .map_err(|e| ResolveError::schema(format!("invalid default query: {e}")))?;
        if self.query_type.is_none() {
            self.query_type = defaults.query_type;
        }
        if self.mode.is_none() {
            self.mode = defaults.mode;
        }
        if self.hidden_values.is_none() {
            self.hidden_values = defaults.hidden_values;
        }
        if self.is_atomic.is_none() {
            self.is_atomic = defaults.is_atomic;
        }
        for (key, value) in defaults.fields {
            self.fields.entry(key).or_insert(value);
        }
        Ok(())
    }
}

/// A raw (term, query) pair. Any `type` tag present on the input is
/// ignored; the tag is derived during resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTermWrapper {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub term: Term,
    #[serde(default)]
    pub q: RawQuery,
    #[serde(rename = "$id", default, skip_serializing_if = "Option::is_none")]
    pub dollar_id: Option<String>,
}

impl RawTermWrapper {
    pub fn new(term: Term) -> Self {
        Self {
            id: None,
            term,
            q: RawQuery::default(),
            dollar_id: None,
        }
    }

    pub fn with_query(mut self, q: RawQuery) -> Self {
        self.q = q;
        self
    }

    /// Parse a raw wrapper from untyped JSON.
    pub fn from_value(value: Value) -> ResolveResult<Self> {
        if !value.is_object() {
            return Err(ResolveError::schema("tw must be an object"));
        }
        if value.get("term").map_or(true, Value::is_null) {
            return Err(ResolveError::schema("missing tw.term"));
        }
        Ok(serde_json::from_value(value)?)
    }
}
