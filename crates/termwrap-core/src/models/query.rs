//! Resolved queries: one typed variant per configuration shape.

use serde::{Deserialize, Serialize};

use super::bin::Bin;
use super::bin_spec::BinSpec;
use super::flags::{is_false, truthy};
use super::groupset::GroupSet;
use super::hidden_values::HiddenValues;

/// How a term's values are turned into analysis input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Discrete,
    Binary,
    Continuous,
    Spline,
    Cuminc,
    Cox,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Discrete => "discrete",
            Self::Binary => "binary",
            Self::Continuous => "continuous",
            Self::Spline => "spline",
            Self::Cuminc => "cuminc",
            Self::Cox => "cox",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration shape; the second dispatch level and the `q.type` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shape {
    Values,
    #[serde(rename = "predefined-groupset")]
    PredefinedGroupSet,
    #[serde(rename = "custom-groupset")]
    CustomGroupSet,
    RegularBin,
    CustomBin,
    Continuous,
    Spline,
}

/// `q.type` on the wire.
pub type QueryType = Shape;

impl Shape {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Values => "values",
            Self::PredefinedGroupSet => "predefined-groupset",
            Self::CustomGroupSet => "custom-groupset",
            Self::RegularBin => "regular-bin",
            Self::CustomBin => "custom-bin",
            Self::Continuous => "continuous",
            Self::Spline => "spline",
        }
    }

    /// Candidate order for discrete kinds.
    pub const DISCRETE: [Shape; 3] = [
        Shape::Values,
        Shape::PredefinedGroupSet,
        Shape::CustomGroupSet,
    ];

    /// Candidate order for numeric kinds.
    pub const NUMERIC: [Shape; 4] = [
        Shape::RegularBin,
        Shape::CustomBin,
        Shape::Continuous,
        Shape::Spline,
    ];
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields every resolved query carries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryCommon {
    #[serde(default)]
    pub mode: Mode,
    #[serde(rename = "hiddenValues", default)]
    pub hidden_values: HiddenValues,
    #[serde(rename = "isAtomic", default, skip_serializing_if = "is_false")]
    pub is_atomic: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeScale {
    Year,
    Age,
}

/// Grade-aggregation settings of condition queries. Empty for every other
/// kind, in which case nothing is serialized.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GradeOptions {
    #[serde(default, deserialize_with = "truthy", skip_serializing_if = "is_false")]
    pub value_by_max_grade: bool,
    #[serde(default, deserialize_with = "truthy", skip_serializing_if = "is_false")]
    pub value_by_most_recent: bool,
    #[serde(default, deserialize_with = "truthy", skip_serializing_if = "is_false")]
    pub value_by_computable_grade: bool,
    #[serde(default, deserialize_with = "truthy", skip_serializing_if = "is_false")]
    pub bar_by_grade: bool,
    #[serde(default, deserialize_with = "truthy", skip_serializing_if = "is_false")]
    pub bar_by_children: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub breaks: Vec<f64>,
    #[serde(rename = "timeScale", default, skip_serializing_if = "Option::is_none")]
    pub time_scale: Option<TimeScale>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValuesQuery {
    #[serde(flatten)]
    pub common: QueryCommon,
    #[serde(flatten)]
    pub grade: GradeOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredefinedGroupSetQuery {
    #[serde(flatten)]
    pub common: QueryCommon,
    pub predefined_groupset_idx: usize,
    #[serde(flatten)]
    pub grade: GradeOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomGroupSetQuery {
    #[serde(flatten)]
    pub common: QueryCommon,
    pub customset: GroupSet,
    #[serde(flatten)]
    pub grade: GradeOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegularBinQuery {
    #[serde(flatten)]
    pub common: QueryCommon,
    #[serde(flatten)]
    pub spec: BinSpec,
    #[serde(rename = "preferredBins", default, skip_serializing_if = "Option::is_none")]
    pub preferred_bins: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomBinQuery {
    #[serde(flatten)]
    pub common: QueryCommon,
    pub lst: Vec<Bin>,
    #[serde(rename = "preferredBins", default, skip_serializing_if = "Option::is_none")]
    pub preferred_bins: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContinuousQuery {
    #[serde(flatten)]
    pub common: QueryCommon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(rename = "convert2ZScore", default, deserialize_with = "truthy", skip_serializing_if = "is_false")]
    pub convert2_z_score: bool,
}

/// A spline knot position on the term's value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Knot {
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineQuery {
    #[serde(flatten)]
    pub common: QueryCommon,
    pub knots: Vec<Knot>,
}

/// A resolved query. The variant is the shape; `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Query {
    #[serde(rename = "values")]
    Values(ValuesQuery),
    #[serde(rename = "predefined-groupset")]
    PredefinedGroupSet(PredefinedGroupSetQuery),
    #[serde(rename = "custom-groupset")]
    CustomGroupSet(CustomGroupSetQuery),
    #[serde(rename = "regular-bin")]
    RegularBin(RegularBinQuery),
    #[serde(rename = "custom-bin")]
    CustomBin(CustomBinQuery),
    #[serde(rename = "continuous")]
    Continuous(ContinuousQuery),
    #[serde(rename = "spline")]
    Spline(SplineQuery),
}

impl Query {
    pub fn shape(&self) -> Shape {
        match self {
            Self::Values(_) => Shape::Values,
            Self::PredefinedGroupSet(_) => Shape::PredefinedGroupSet,
            Self::CustomGroupSet(_) => Shape::CustomGroupSet,
            Self::RegularBin(_) => Shape::RegularBin,
            Self::CustomBin(_) => Shape::CustomBin,
            Self::Continuous(_) => Shape::Continuous,
            Self::Spline(_) => Shape::Spline,
        }
    }

    pub fn common(&self) -> &QueryCommon {
        match self {
            Self::Values(q) => &q.common,
            Self::PredefinedGroupSet(q) => &q.common,
            Self::CustomGroupSet(q) => &q.common,
            Self::RegularBin(q) => &q.common,
            Self::CustomBin(q) => &q.common,
            Self::Continuous(q) => &q.common,
            Self::Spline(q) => &q.common,
        }
    }

    pub fn mode(&self) -> Mode {
        self.common().mode
    }

    pub fn hidden_values(&self) -> &HiddenValues {
        &self.common().hidden_values
    }
}
