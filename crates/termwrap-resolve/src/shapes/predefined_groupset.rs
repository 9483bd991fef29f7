use termwrap_core::errors::{ResolveError, ResolveResult};
use termwrap_core::models::{PredefinedGroupSetQuery, Query, RawQuery, Shape, Term};

use super::{check_group_count, ensure_groupsets_enabled, is_discrete_mode, ShapeInput, ShapeResolver};

/// One of the groupsets listed in `term.groupsetting.lst`, by index.
pub struct PredefinedGroupSetShape;

impl ShapeResolver for PredefinedGroupSetShape {
    const SHAPE: Shape = Shape::PredefinedGroupSet;

    fn infers(_term: &Term, q: &RawQuery) -> bool {
        is_discrete_mode(q.mode) && q.has("predefined_groupset_idx")
    }

    fn validate(input: ShapeInput<'_>) -> ResolveResult<Query> {
        ensure_groupsets_enabled(input.term)?;
        let idx: usize = input.q.take("predefined_groupset_idx")?.unwrap_or(0);
        let groupset = input.term.groupset(idx).ok_or_else(|| {
            ResolveError::invariant(format!(
                "term {} has no predefined groupset at index {idx}",
                input.term.id
            ))
        })?;
        check_group_count(groupset, input.common.mode)?;
        Ok(Query::PredefinedGroupSet(PredefinedGroupSetQuery {
            common: input.common,
            predefined_groupset_idx: idx,
            grade: input.grade,
        }))
    }
}
