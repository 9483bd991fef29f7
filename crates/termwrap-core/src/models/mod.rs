//! Data model: terms, raw and resolved queries, bins, group sets, tags.

pub mod bin;
pub mod bin_spec;
pub mod flags;
pub mod groupset;
pub mod hidden_values;
pub mod query;
pub mod raw;
pub mod summary;
pub mod tag;
pub mod term;
pub mod term_wrapper;

pub use bin::Bin;
pub use bin_spec::{BinSpec, FirstBin, LastBin};
pub use groupset::{Group, GroupSet, GroupType, GroupValue};
pub use hidden_values::HiddenValues;
pub use query::{
    ContinuousQuery, CustomBinQuery, CustomGroupSetQuery, GradeOptions, Knot, Mode,
    PredefinedGroupSetQuery, Query, QueryCommon, QueryType, RegularBinQuery, Shape, SplineQuery,
    TimeScale, ValuesQuery,
};
pub use raw::{LegacyGroupSetting, RawQuery, RawTermWrapper};
pub use summary::{percentile_key, PercentileValues, Summary};
pub use tag::TwTag;
pub use term::{Term, TermBins, TermGroupSetting, TermKind, TermType, TermValue};
pub use term_wrapper::TermWrapper;
