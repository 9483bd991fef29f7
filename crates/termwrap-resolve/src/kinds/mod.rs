//! Level-one dispatch: one resolver family per term kind.

pub mod categorical;
pub mod condition;
pub mod gene_variant;
pub mod numeric;
pub mod term_collection;

use termwrap_core::config::TermwrapConfig;
use termwrap_core::errors::{ResolveError, ResolveResult};
use termwrap_core::models::{GradeOptions, Mode, RawQuery, RawTermWrapper, Shape, Term, TermKind, TermWrapper};
use termwrap_core::traits::Vocabulary;
use tracing::debug;

use crate::base::TwBase;
use crate::shapes::{self, ShapeInput};

/// Router state a kind resolver may read.
#[derive(Debug)]
pub struct KindContext<'a, V> {
    pub vocab: &'a V,
    pub config: &'a TermwrapConfig,
}

impl<'a, V> KindContext<'a, V> {
    pub fn base(&self, kind: TermKind) -> TwBase<'a> {
        TwBase::new(kind, &self.config.resolve)
    }
}

/// Resolve a preprocessed raw wrapper through the resolver of its kind.
pub async fn resolve<V: Vocabulary>(
    mut raw: RawTermWrapper,
    ctx: &KindContext<'_, V>,
) -> ResolveResult<TermWrapper> {
    let kind = raw.term.kind();
    debug!(term = %raw.term.id, kind = %kind, "dispatching on term kind");
    ctx.base(kind).merge_default_q(&mut raw.q)?;
    match kind {
        TermKind::Categorical | TermKind::Qualitative => categorical::resolve(raw, ctx),
        TermKind::Numeric | TermKind::Date => numeric::resolve(raw, ctx).await,
        TermKind::Condition => condition::resolve(raw, ctx),
        TermKind::GeneVariant => gene_variant::resolve(raw, ctx),
        TermKind::TermCollection => term_collection::resolve(raw, ctx),
    }
}

/// What distinguishes one kind's shape stage from another's.
pub struct ShapeStage {
    pub candidates: &'static [Shape],
    pub modes: fn(Shape) -> &'static [Mode],
    pub grade: GradeOptions,
}

/// Classify, validate, and tag a filled raw wrapper.
pub fn complete<V>(
    raw: RawTermWrapper,
    stage: ShapeStage,
    ctx: &KindContext<'_, V>,
) -> ResolveResult<TermWrapper> {
    let RawTermWrapper {
        id,
        term,
        mut q,
        dollar_id,
    } = raw;
    let kind = term.kind();
    let base = ctx.base(kind);
    let shape = shapes::classify(stage.candidates, &term, &q)
        .ok_or_else(|| routing_miss(&term, &q))?;
    debug!(term = %term.id, shape = %shape, "classified query shape");

    let common = base.common(&term, &mut q, shape);
    base.check_mode(&term, shape, common.mode, (stage.modes)(shape))?;
    let query = shapes::validate(
        shape,
        ShapeInput {
            kind,
            term: &term,
            q: &mut q,
            common,
            grade: stage.grade,
            binning: &ctx.config.binning,
        },
    )?;
    if !q.fields.is_empty() {
        debug!(
            term = %term.id,
            dropped = ?q.fields.keys().collect::<Vec<_>>(),
            "dropped query keys the shape does not use"
        );
    }
    base.finish(id, term, query, dollar_id)
}

fn routing_miss(term: &Term, q: &RawQuery) -> ResolveError {
    match q.query_type {
        Some(shape) => ResolveError::routing_miss(format!(
            "{} terms do not take q.type='{shape}'",
            term.term_type
        )),
        None => ResolveError::routing_miss(format!(
            "no q.type for {} term {} could be inferred from mode '{}'",
            term.term_type,
            term.id,
            q.mode.unwrap_or_default()
        )),
    }
}
