//! Level-two dispatch: query shapes.
//!
//! Classification is pure and picks at most one shape from a kind's
//! candidates. Validation then types the query or fails; it never defers.

pub mod continuous;
pub mod custom_bin;
pub mod custom_groupset;
pub mod predefined_groupset;
pub mod regular_bin;
pub mod spline;
pub mod values;

use termwrap_core::config::BinningConfig;
use termwrap_core::constants::BINARY_GROUP_COUNT;
use termwrap_core::errors::{ResolveError, ResolveResult};
use termwrap_core::models::{
    GradeOptions, GroupSet, Mode, Query, QueryCommon, RawQuery, Shape, Term, TermKind,
};

pub use continuous::ContinuousShape;
pub use custom_bin::CustomBinShape;
pub use custom_groupset::CustomGroupSetShape;
pub use predefined_groupset::PredefinedGroupSetShape;
pub use regular_bin::RegularBinShape;
pub use spline::SplineShape;
pub use values::ValuesShape;

/// Everything a shape needs to type one query.
#[derive(Debug)]
pub struct ShapeInput<'a> {
    pub kind: TermKind,
    pub term: &'a Term,
    /// Shape fields are taken out of here; whatever is left is dropped.
    pub q: &'a mut RawQuery,
    pub common: QueryCommon,
    /// Condition grade settings; empty for other kinds.
    pub grade: GradeOptions,
    pub binning: &'a BinningConfig,
}

pub trait ShapeResolver {
    const SHAPE: Shape;

    /// Whether this shape claims a query that names no `q.type`.
    fn infers(term: &Term, q: &RawQuery) -> bool;

    fn validate(input: ShapeInput<'_>) -> ResolveResult<Query>;
}

/// The shape `q` resolves to among `candidates`, in priority order.
///
/// An explicit `q.type` is taken at its word when the kind supports it.
pub fn classify(candidates: &[Shape], term: &Term, q: &RawQuery) -> Option<Shape> {
    match q.query_type {
        Some(shape) => candidates.contains(&shape).then_some(shape),
        None => candidates
            .iter()
            .copied()
            .find(|shape| infers(*shape, term, q)),
    }
}

fn infers(shape: Shape, term: &Term, q: &RawQuery) -> bool {
    match shape {
        Shape::Values => ValuesShape::infers(term, q),
        Shape::PredefinedGroupSet => PredefinedGroupSetShape::infers(term, q),
        Shape::CustomGroupSet => CustomGroupSetShape::infers(term, q),
        Shape::RegularBin => RegularBinShape::infers(term, q),
        Shape::CustomBin => CustomBinShape::infers(term, q),
        Shape::Continuous => ContinuousShape::infers(term, q),
        Shape::Spline => SplineShape::infers(term, q),
    }
}

pub fn validate(shape: Shape, input: ShapeInput<'_>) -> ResolveResult<Query> {
    match shape {
        Shape::Values => ValuesShape::validate(input),
        Shape::PredefinedGroupSet => PredefinedGroupSetShape::validate(input),
        Shape::CustomGroupSet => CustomGroupSetShape::validate(input),
        Shape::RegularBin => RegularBinShape::validate(input),
        Shape::CustomBin => CustomBinShape::validate(input),
        Shape::Continuous => ContinuousShape::validate(input),
        Shape::Spline => SplineShape::validate(input),
    }
}

/// Discrete and binary queries; the modes bin and group shapes infer from.
fn is_discrete_mode(mode: Option<Mode>) -> bool {
    matches!(
        mode,
        None | Some(Mode::Discrete | Mode::Binary | Mode::Cuminc | Mode::Cox)
    )
}

fn ensure_groupsets_enabled(term: &Term) -> ResolveResult<()> {
    if term.groupsetting.as_ref().is_some_and(|gs| gs.disabled) {
        return Err(ResolveError::invariant(format!(
            "groupsetting is disabled for term {}",
            term.id
        )));
    }
    Ok(())
}

fn check_group_count(groupset: &GroupSet, mode: Mode) -> ResolveResult<()> {
    let count = groupset.group_count();
    if mode == Mode::Binary && count != BINARY_GROUP_COUNT {
        return Err(ResolveError::invariant(
            "there must be exactly two groups in binary mode",
        ));
    }
    if count < 2 {
        return Err(ResolveError::invariant(format!(
            "a groupset needs at least two groups, found {count}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use termwrap_core::models::TermType;

    fn raw(q: serde_json::Value) -> RawQuery {
        serde_json::from_value(q).unwrap()
    }

    #[test]
    fn discrete_inference_follows_priority() {
        let term = Term::new("x", TermType::Categorical);
        assert_eq!(classify(&Shape::DISCRETE, &term, &raw(json!({}))), Some(Shape::Values));
        assert_eq!(
            classify(&Shape::DISCRETE, &term, &raw(json!({"predefined_groupset_idx": 1}))),
            Some(Shape::PredefinedGroupSet)
        );
        assert_eq!(
            classify(&Shape::DISCRETE, &term, &raw(json!({"customset": {"groups": []}}))),
            Some(Shape::CustomGroupSet)
        );
    }

    #[test]
    fn numeric_inference_reads_mode_and_fields() {
        let term = Term::new("age", TermType::Float);
        assert_eq!(classify(&Shape::NUMERIC, &term, &raw(json!({}))), None);
        assert_eq!(
            classify(&Shape::NUMERIC, &term, &raw(json!({"bin_size": 5}))),
            Some(Shape::RegularBin)
        );
        assert_eq!(
            classify(&Shape::NUMERIC, &term, &raw(json!({"lst": []}))),
            Some(Shape::CustomBin)
        );
        assert_eq!(
            classify(&Shape::NUMERIC, &term, &raw(json!({"mode": "continuous"}))),
            Some(Shape::Continuous)
        );
        assert_eq!(
            classify(&Shape::NUMERIC, &term, &raw(json!({"mode": "spline"}))),
            Some(Shape::Spline)
        );
    }

    #[test]
    fn explicit_type_outside_candidates_is_unclaimed() {
        let term = Term::new("x", TermType::Categorical);
        assert_eq!(
            classify(&Shape::DISCRETE, &term, &raw(json!({"type": "regular-bin"}))),
            None
        );
    }
}
