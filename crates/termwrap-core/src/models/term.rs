//! Terms: described clinical/genomic variables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::flags::{is_false, truthy};
use crate::constants::{DEFAULT_BIN_PRESET, LESS_BIN_PRESET};
use super::groupset::GroupSet;

/// The closed set of term types a vocabulary may describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TermType {
    Categorical,
    Integer,
    Float,
    Condition,
    Date,
    GeneVariant,
    GeneExpression,
    MetaboliteIntensity,
    DnaMethylation,
    Snp,
    SingleCellCellType,
    TermCollection,
}

impl TermType {
    /// The resolver family responsible for this term type.
    pub fn kind(self) -> TermKind {
        match self {
            Self::Categorical => TermKind::Categorical,
            Self::Snp | Self::SingleCellCellType => TermKind::Qualitative,
            Self::Integer
            | Self::Float
            | Self::GeneExpression
            | Self::MetaboliteIntensity
            | Self::DnaMethylation => TermKind::Numeric,
            Self::Date => TermKind::Date,
            Self::Condition => TermKind::Condition,
            Self::GeneVariant => TermKind::GeneVariant,
            Self::TermCollection => TermKind::TermCollection,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Categorical => "categorical",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Condition => "condition",
            Self::Date => "date",
            Self::GeneVariant => "geneVariant",
            Self::GeneExpression => "geneExpression",
            Self::MetaboliteIntensity => "metaboliteIntensity",
            Self::DnaMethylation => "dnaMethylation",
            Self::Snp => "snp",
            Self::SingleCellCellType => "singleCellCellType",
            Self::TermCollection => "termCollection",
        }
    }
}

impl std::fmt::Display for TermType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolver family; the first dispatch level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TermKind {
    Categorical,
    Qualitative,
    Numeric,
    Date,
    Condition,
    GeneVariant,
    TermCollection,
}

impl TermKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Categorical => "categorical",
            Self::Qualitative => "qualitative",
            Self::Numeric => "numeric",
            Self::Date => "date",
            Self::Condition => "condition",
            Self::GeneVariant => "geneVariant",
            Self::TermCollection => "termCollection",
        }
    }
}

impl std::fmt::Display for TermKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of `term.values`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TermValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "truthy", skip_serializing_if = "is_false")]
    pub uncomputable: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TermValue {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }
}

/// Predefined partitions offered by the vocabulary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TermGroupSetting {
    #[serde(default, deserialize_with = "truthy", skip_serializing_if = "is_false")]
    pub disabled: bool,
    #[serde(default)]
    pub lst: Vec<GroupSet>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Bin presets attached to a numeric term. Presets stay loose JSON until a
/// query adopts one, so a malformed preset is reported by the same
/// validation path as a malformed query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TermBins {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub less: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_offset: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TermBins {
    /// Look up a preset by name (`default`, `less`, or a vocabulary-specific key).
    pub fn preset(&self, name: &str) -> Option<&Map<String, Value>> {
        match name {
            DEFAULT_BIN_PRESET => self.default.as_ref(),
            LESS_BIN_PRESET => self.less.as_ref(),
            other => self.extra.get(other).and_then(Value::as_object),
        }
    }
}

/// A described variable. Kind-specific payload is optional here and
/// checked by the kind resolver; keys this crate does not model are kept
/// in `extra` so a vocabulary's term survives resolution unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "type")]
    pub term_type: TermType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<BTreeMap<String, TermValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groupsetting: Option<TermGroupSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bins: Option<TermBins>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isleaf: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gene: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termlst: Option<Vec<Term>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Term {
    /// A bare term of the given type; mostly for tests and vocabularies.
    pub fn new(id: impl Into<String>, term_type: TermType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            term_type,
            values: None,
            groupsetting: None,
            bins: None,
            isleaf: None,
            gene: None,
            chr: None,
            start: None,
            stop: None,
            termlst: None,
            extra: Map::new(),
        }
    }

    pub fn kind(&self) -> TermKind {
        self.term_type.kind()
    }

    /// Number of entries in `term.values`, zero when absent.
    pub fn value_count(&self) -> usize {
        self.values.as_ref().map_or(0, BTreeMap::len)
    }

    /// The predefined group set at `idx`, if the term lists one there.
    pub fn groupset(&self, idx: usize) -> Option<&GroupSet> {
        self.groupsetting.as_ref().and_then(|gs| gs.lst.get(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_keys_survive_round_trip() {
        let input = json!({
            "id": "sex",
            "name": "Sex",
            "type": "categorical",
            "values": {"1": {"label": "Male"}, "2": {"label": "Female"}},
            "hashtmldetail": true
        });
        let term: Term = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(term.kind(), TermKind::Categorical);
        assert_eq!(term.value_count(), 2);
        assert_eq!(serde_json::to_value(&term).unwrap(), input);
    }

    #[test]
    fn qualitative_types_share_a_kind() {
        assert_eq!(TermType::Snp.kind(), TermKind::Qualitative);
        assert_eq!(TermType::SingleCellCellType.kind(), TermKind::Qualitative);
        assert_eq!(TermType::GeneExpression.kind(), TermKind::Numeric);
    }

    #[test]
    fn bin_presets_by_name() {
        let bins: TermBins = serde_json::from_value(json!({
            "default": {"bin_size": 5},
            "less": {"bin_size": 10},
            "quintiles": {"bin_size": 20},
            "rounding": ".1f"
        }))
        .unwrap();
        assert_eq!(bins.preset(DEFAULT_BIN_PRESET).unwrap()["bin_size"], json!(5));
        assert_eq!(bins.preset(LESS_BIN_PRESET).unwrap()["bin_size"], json!(10));
        assert_eq!(bins.preset("quintiles").unwrap()["bin_size"], json!(20));
        assert!(bins.preset("rounding").is_none());
        assert!(bins.preset("median").is_none());
    }
}
