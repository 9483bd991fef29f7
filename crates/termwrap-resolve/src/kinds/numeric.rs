//! Numeric terms (integer, float, and the omics intensities) and dates.
//!
//! The only kinds that reach the vocabulary: default bins when the term
//! carries none, the median for `preferredBins: "median"`, and default
//! spline knots.

use termwrap_binning::median_bins;
use termwrap_core::constants::{DEFAULT_BIN_PRESET, MEDIAN_BIN_PRESET};
use termwrap_core::errors::{ResolveError, ResolveResult};
use termwrap_core::models::{
    GradeOptions, Knot, Mode, RawTermWrapper, Shape, TermKind, TermWrapper,
};
use termwrap_core::traits::Vocabulary;
use tracing::{debug, info};

use super::{complete, KindContext, ShapeStage};
use crate::shapes;

const DATE_CANDIDATES: [Shape; 3] = [Shape::RegularBin, Shape::CustomBin, Shape::Continuous];

fn modes(shape: Shape) -> &'static [Mode] {
    match shape {
        Shape::RegularBin | Shape::CustomBin => &[Mode::Discrete, Mode::Binary],
        Shape::Continuous => &[Mode::Continuous],
        Shape::Spline => &[Mode::Spline],
        _ => &[],
    }
}

fn candidates(kind: TermKind) -> &'static [Shape] {
    match kind {
        TermKind::Date => &DATE_CANDIDATES,
        _ => &Shape::NUMERIC,
    }
}

/// A query that names no bins yet, in a mode bins serve, with either no
/// shape or regular bins.
fn wants_bins(raw: &RawTermWrapper) -> bool {
    let q = &raw.q;
    matches!(q.query_type, None | Some(Shape::RegularBin))
        && matches!(q.mode, None | Some(Mode::Discrete | Mode::Binary))
        && !q.has("bin_size")
        && !q.has("lst")
}

fn preferred_bins(raw: &RawTermWrapper) -> String {
    raw.q
        .get("preferredBins")
        .and_then(|v| v.as_str())
        .unwrap_or(DEFAULT_BIN_PRESET)
        .to_string()
}

/// Seed an unspecified query from the preferred bin preset; keys the raw
/// query already sets are kept.
async fn seed_bins<V: Vocabulary>(
    raw: &mut RawTermWrapper,
    ctx: &KindContext<'_, V>,
) -> ResolveResult<()> {
    if !wants_bins(raw) {
        return Ok(());
    }
    let mut preferred = preferred_bins(raw);
    if preferred == MEDIAN_BIN_PRESET && raw.q.query_type.is_some() {
        preferred = DEFAULT_BIN_PRESET.to_string();
    }
    if preferred == MEDIAN_BIN_PRESET {
        let percentile = ctx.config.resolve.effective_median_percentile();
        info!(term = %raw.term.id, percentile, "fetching median for median bins");
        let fetched = ctx
            .vocab
            .get_percentile(&raw.term.id, &[percentile])
            .await?;
        let median = fetched.values.first().copied().ok_or_else(|| {
            ResolveError::remote_fetch(
                "get_percentile",
                format!("no median returned for term {}", raw.term.id),
            )
        })?;
        raw.q.query_type = Some(Shape::CustomBin);
        raw.q
            .fields
            .insert("lst".to_string(), serde_json::to_value(median_bins(median))?);
        return Ok(());
    }
    let Some(bins) = raw.term.bins.as_ref() else {
        return Ok(());
    };
    let preset = bins.preset(&preferred).ok_or_else(|| {
        ResolveError::schema(format!(
            "term {} has no '{preferred}' bin preset",
            raw.term.id
        ))
    })?;
    raw.q.merge_defaults(preset)?;
    debug!(term = %raw.term.id, preset = %preferred, "seeded query from bin preset");
    Ok(())
}

/// Knots at the configured percentiles of the term's values.
async fn default_knots<V: Vocabulary>(
    raw: &mut RawTermWrapper,
    ctx: &KindContext<'_, V>,
) -> ResolveResult<()> {
    let percentiles = ctx.config.resolve.effective_spline_knot_percentiles();
    info!(term = %raw.term.id, ?percentiles, "fetching default spline knots");
    let fetched = ctx
        .vocab
        .get_percentile(&raw.term.id, &percentiles)
        .await?;
    if fetched.values.len() != percentiles.len() {
        return Err(ResolveError::remote_fetch(
            "get_percentile",
            format!(
                "expected {} percentile values for term {}, got {}",
                percentiles.len(),
                raw.term.id,
                fetched.values.len()
            ),
        ));
    }
    let knots: Vec<Knot> = fetched.values.into_iter().map(|value| Knot { value }).collect();
    raw.q.fields.insert("knots".to_string(), serde_json::to_value(knots)?);
    Ok(())
}

pub async fn resolve<V: Vocabulary>(
    mut raw: RawTermWrapper,
    ctx: &KindContext<'_, V>,
) -> ResolveResult<TermWrapper> {
    let kind = raw.term.kind();
    let candidates = candidates(kind);

    seed_bins(&mut raw, ctx).await?;
    if raw.term.bins.is_none() && wants_bins(&raw) {
        info!(term = %raw.term.id, "term.bins absent; requesting default bins");
        ctx.vocab.set_term_bins(&mut raw).await?;
        if raw.term.bins.is_none() {
            return Err(ResolveError::remote_fetch(
                "set_term_bins",
                format!("vocabulary supplied no bins for term {}", raw.term.id),
            ));
        }
        seed_bins(&mut raw, ctx).await?;
    }

    let shape = shapes::classify(candidates, &raw.term, &raw.q);
    if shape == Some(Shape::Spline) && !raw.q.has("knots") {
        default_knots(&mut raw, ctx).await?;
    }

    complete(
        raw,
        ShapeStage {
            candidates,
            modes,
            grade: GradeOptions::default(),
        },
        ctx,
    )
}
