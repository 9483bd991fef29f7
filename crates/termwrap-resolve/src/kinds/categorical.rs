//! Categorical terms and the qualitative types (snp, singleCellCellType)
//! that resolve the same way.

use termwrap_core::errors::ResolveResult;
use termwrap_core::models::{
    GradeOptions, Mode, RawTermWrapper, Shape, TermGroupSetting, TermWrapper,
};

use super::{complete, KindContext, ShapeStage};

const MODES: &[Mode] = &[Mode::Discrete, Mode::Binary];

fn modes(_shape: Shape) -> &'static [Mode] {
    MODES
}

/// Default the term payload; an unspecified query lists values.
pub fn fill(raw: &mut RawTermWrapper) {
    raw.term.values.get_or_insert_with(Default::default);
    raw.term
        .groupsetting
        .get_or_insert_with(TermGroupSetting::default);
    let q = &mut raw.q;
    if q.query_type.is_none() && !q.has("predefined_groupset_idx") && !q.has("customset") {
        q.query_type = Some(Shape::Values);
    }
}

pub fn resolve<V>(mut raw: RawTermWrapper, ctx: &KindContext<'_, V>) -> ResolveResult<TermWrapper> {
    fill(&mut raw);
    complete(
        raw,
        ShapeStage {
            candidates: &Shape::DISCRETE,
            modes,
            grade: GradeOptions::default(),
        },
        ctx,
    )
}
