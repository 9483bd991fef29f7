use termwrap_core::errors::{ResolveError, ResolveResult};
use termwrap_core::models::{CustomGroupSetQuery, GroupSet, Query, RawQuery, Shape, Term};

use super::{check_group_count, ensure_groupsets_enabled, is_discrete_mode, ShapeInput, ShapeResolver};

/// A caller-defined partition carried in `q.customset`.
pub struct CustomGroupSetShape;

impl ShapeResolver for CustomGroupSetShape {
    const SHAPE: Shape = Shape::CustomGroupSet;

    fn infers(_term: &Term, q: &RawQuery) -> bool {
        is_discrete_mode(q.mode) && q.has("customset")
    }

    fn validate(input: ShapeInput<'_>) -> ResolveResult<Query> {
        ensure_groupsets_enabled(input.term)?;
        let customset: GroupSet = input
            .q
            .take("customset")?
            .ok_or_else(|| ResolveError::invariant("custom groupset missing its customset"))?;
        check_group_count(&customset, input.common.mode)?;
        Ok(Query::CustomGroupSet(CustomGroupSetQuery {
            common: input.common,
            customset,
            grade: input.grade,
        }))
    }
}
