//! Combined kind + shape discriminant of a resolved term wrapper.

use serde::{Deserialize, Serialize};

use super::query::Shape;
use super::term::TermKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TwTag {
    CatTWValues,
    CatTWPredefinedGS,
    CatTWCustomGS,
    QualTWValues,
    QualTWPredefinedGS,
    QualTWCustomGS,
    CondTWValues,
    CondTWPredefinedGS,
    CondTWCustomGS,
    GvTWValues,
    GvTWPredefinedGS,
    GvTWCustomGS,
    NumTWRegularBin,
    NumTWCustomBin,
    NumTWCont,
    NumTWSpline,
    DateTWRegularBin,
    DateTWCustomBin,
    DateTWCont,
    TermCollectionTWValues,
    TermCollectionTWCont,
}

impl TwTag {
    /// The tag for a kind/shape pair, or `None` when the kind never takes
    /// that shape.
    pub fn from_parts(kind: TermKind, shape: Shape) -> Option<Self> {
        use Shape as S;
        use TermKind as K;
        let tag = match (kind, shape) {
            (K::Categorical, S::Values) => Self::CatTWValues,
            (K::Categorical, S::PredefinedGroupSet) => Self::CatTWPredefinedGS,
            (K::Categorical, S::CustomGroupSet) => Self::CatTWCustomGS,
            (K::Qualitative, S::Values) => Self::QualTWValues,
            (K::Qualitative, S::PredefinedGroupSet) => Self::QualTWPredefinedGS,
            (K::Qualitative, S::CustomGroupSet) => Self::QualTWCustomGS,
            (K::Condition, S::Values) => Self::CondTWValues,
            (K::Condition, S::PredefinedGroupSet) => Self::CondTWPredefinedGS,
            (K::Condition, S::CustomGroupSet) => Self::CondTWCustomGS,
            (K::GeneVariant, S::Values) => Self::GvTWValues,
            (K::GeneVariant, S::PredefinedGroupSet) => Self::GvTWPredefinedGS,
            (K::GeneVariant, S::CustomGroupSet) => Self::GvTWCustomGS,
            (K::Numeric, S::RegularBin) => Self::NumTWRegularBin,
            (K::Numeric, S::CustomBin) => Self::NumTWCustomBin,
            (K::Numeric, S::Continuous) => Self::NumTWCont,
            (K::Numeric, S::Spline) => Self::NumTWSpline,
            (K::Date, S::RegularBin) => Self::DateTWRegularBin,
            (K::Date, S::CustomBin) => Self::DateTWCustomBin,
            (K::Date, S::Continuous) => Self::DateTWCont,
            (K::TermCollection, S::Values) => Self::TermCollectionTWValues,
            (K::TermCollection, S::Continuous) => Self::TermCollectionTWCont,
            _ => return None,
        };
        Some(tag)
    }

    pub fn kind(self) -> TermKind {
        match self {
            Self::CatTWValues | Self::CatTWPredefinedGS | Self::CatTWCustomGS => {
                TermKind::Categorical
            }
            Self::QualTWValues | Self::QualTWPredefinedGS | Self::QualTWCustomGS => {
                TermKind::Qualitative
            }
            Self::CondTWValues | Self::CondTWPredefinedGS | Self::CondTWCustomGS => {
                TermKind::Condition
            }
            Self::GvTWValues | Self::GvTWPredefinedGS | Self::GvTWCustomGS => {
                TermKind::GeneVariant
            }
            Self::NumTWRegularBin | Self::NumTWCustomBin | Self::NumTWCont | Self::NumTWSpline => {
                TermKind::Numeric
            }
            Self::DateTWRegularBin | Self::DateTWCustomBin | Self::DateTWCont => TermKind::Date,
            Self::TermCollectionTWValues | Self::TermCollectionTWCont => TermKind::TermCollection,
        }
    }

    pub fn shape(self) -> Shape {
        match self {
            Self::CatTWValues
            | Self::QualTWValues
            | Self::CondTWValues
            | Self::GvTWValues
            | Self::TermCollectionTWValues => Shape::Values,
            Self::CatTWPredefinedGS
            | Self::QualTWPredefinedGS
            | Self::CondTWPredefinedGS
            | Self::GvTWPredefinedGS => Shape::PredefinedGroupSet,
            Self::CatTWCustomGS | Self::QualTWCustomGS | Self::CondTWCustomGS | Self::GvTWCustomGS => {
                Shape::CustomGroupSet
            }
            Self::NumTWRegularBin | Self::DateTWRegularBin => Shape::RegularBin,
            Self::NumTWCustomBin | Self::DateTWCustomBin => Shape::CustomBin,
            Self::NumTWCont | Self::DateTWCont | Self::TermCollectionTWCont => Shape::Continuous,
            Self::NumTWSpline => Shape::Spline,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CatTWValues => "CatTWValues",
            Self::CatTWPredefinedGS => "CatTWPredefinedGS",
            Self::CatTWCustomGS => "CatTWCustomGS",
            Self::QualTWValues => "QualTWValues",
            Self::QualTWPredefinedGS => "QualTWPredefinedGS",
            Self::QualTWCustomGS => "QualTWCustomGS",
            Self::CondTWValues => "CondTWValues",
            Self::CondTWPredefinedGS => "CondTWPredefinedGS",
            Self::CondTWCustomGS => "CondTWCustomGS",
            Self::GvTWValues => "GvTWValues",
            Self::GvTWPredefinedGS => "GvTWPredefinedGS",
            Self::GvTWCustomGS => "GvTWCustomGS",
            Self::NumTWRegularBin => "NumTWRegularBin",
            Self::NumTWCustomBin => "NumTWCustomBin",
            Self::NumTWCont => "NumTWCont",
            Self::NumTWSpline => "NumTWSpline",
            Self::DateTWRegularBin => "DateTWRegularBin",
            Self::DateTWCustomBin => "DateTWCustomBin",
            Self::DateTWCont => "DateTWCont",
            Self::TermCollectionTWValues => "TermCollectionTWValues",
            Self::TermCollectionTWCont => "TermCollectionTWCont",
        }
    }
}

impl std::fmt::Display for TwTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
