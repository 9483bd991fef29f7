use termwrap_core::constants::BINARY_GROUP_COUNT;
use termwrap_core::errors::{ResolveError, ResolveResult};
use termwrap_core::models::{Mode, Query, RawQuery, Shape, Term, TermKind, ValuesQuery};

use super::{is_discrete_mode, ShapeInput, ShapeResolver};

/// Every term value is its own category.
pub struct ValuesShape;

impl ShapeResolver for ValuesShape {
    const SHAPE: Shape = Shape::Values;

    fn infers(_term: &Term, q: &RawQuery) -> bool {
        is_discrete_mode(q.mode) && !q.has("predefined_groupset_idx") && !q.has("customset")
    }

    fn validate(input: ShapeInput<'_>) -> ResolveResult<Query> {
        // condition grades are grouped by breaks, checked by the kind
        if input.common.mode == Mode::Binary
            && input.kind != TermKind::Condition
            && input.term.value_count() != BINARY_GROUP_COUNT
        {
            return Err(ResolveError::invariant("term.values must have exactly two keys"));
        }
        Ok(Query::Values(ValuesQuery {
            common: input.common,
            grade: input.grade,
        }))
    }
}
