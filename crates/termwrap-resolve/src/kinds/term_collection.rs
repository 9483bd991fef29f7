//! Term collections: several member terms analyzed together.

use std::collections::{BTreeMap, BTreeSet};

use termwrap_core::errors::{ResolveError, ResolveResult};
use termwrap_core::models::{
    GradeOptions, Mode, RawTermWrapper, Shape, TermValue, TermWrapper,
};

use super::{complete, KindContext, ShapeStage};

const CANDIDATES: [Shape; 2] = [Shape::Values, Shape::Continuous];

fn modes(shape: Shape) -> &'static [Mode] {
    match shape {
        Shape::Continuous => &[Mode::Continuous],
        _ => &[Mode::Discrete],
    }
}

/// Check the member list and derive `term.values` from it. An unspecified
/// query is continuous.
pub fn fill(raw: &mut RawTermWrapper) -> ResolveResult<()> {
    let term = &mut raw.term;
    let members = match term.termlst.as_deref() {
        Some(members) if !members.is_empty() => members,
        _ => {
            return Err(ResolveError::schema(
                "termCollection term requires a non-empty termlst",
            ))
        }
    };
    let mut seen = BTreeSet::new();
    for member in members {
        if member.id.is_empty() {
            return Err(ResolveError::schema("termlst member is missing an id"));
        }
        if !seen.insert(member.id.as_str()) {
            return Err(ResolveError::invariant(format!(
                "duplicate member term '{}' in termlst",
                member.id
            )));
        }
    }
    if term.values.is_none() {
        let values: BTreeMap<String, TermValue> = members
            .iter()
            .map(|m| {
                let label = if m.name.is_empty() { &m.id } else { &m.name };
                (m.id.clone(), TermValue::labeled(label.clone()))
            })
            .collect();
        term.values = Some(values);
    }
    if raw.q.query_type.is_none() && raw.q.mode.is_none() {
        raw.q.mode = Some(Mode::Continuous);
    }
    Ok(())
}

pub fn resolve<V>(mut raw: RawTermWrapper, ctx: &KindContext<'_, V>) -> ResolveResult<TermWrapper> {
    fill(&mut raw)?;
    complete(
        raw,
        ShapeStage {
            candidates: &CANDIDATES,
            modes,
            grade: GradeOptions::default(),
        },
        ctx,
    )
}
