//! Gene variants: mutation classes observed in a gene or genomic region.

use std::collections::BTreeMap;

use termwrap_core::constants::WILDTYPE_CLASS;
use termwrap_core::errors::{ResolveError, ResolveResult};
use termwrap_core::models::{
    GradeOptions, Group, GroupSet, Mode, RawTermWrapper, Shape, Term, TermGroupSetting,
    TermValue, TermWrapper,
};

use super::{complete, KindContext, ShapeStage};

/// Mutation classes, keyed the way variant data encodes them.
const MUTATION_CLASSES: [(&str, &str); 13] = [
    ("M", "Missense"),
    ("F", "Frameshift"),
    ("N", "Nonsense"),
    ("S", "Silent"),
    ("D", "Protein deletion"),
    ("I", "Protein insertion"),
    ("P", "Splice region"),
    ("L", "Splice"),
    ("CNV_amp", "Copy number gain"),
    ("CNV_loss", "Copy number loss"),
    ("Fuserna", "Fusion transcript"),
    (WILDTYPE_CLASS, "Wildtype"),
    (NOT_TESTED_CLASS, "Not tested"),
];

const NOT_TESTED_CLASS: &str = "Blank";

const DEFAULT_GROUPSET_NAME: &str = "Mutated vs. Wildtype";

const MODES: &[Mode] = &[Mode::Discrete, Mode::Binary];

fn modes(_shape: Shape) -> &'static [Mode] {
    MODES
}

/// `TP53`, or `chr17:7661779-7687538` for a region.
pub fn locus_name(term: &Term) -> ResolveResult<String> {
    if let Some(gene) = term.gene.as_deref().filter(|g| !g.is_empty()) {
        return Ok(gene.to_string());
    }
    match (term.chr.as_deref(), term.start, term.stop) {
        (Some(chr), Some(start), Some(stop)) if !chr.is_empty() => {
            if start >= stop {
                return Err(ResolveError::schema(format!(
                    "geneVariant region start {start} must be less than stop {stop}"
                )));
            }
            Ok(format!("{chr}:{start}-{stop}"))
        }
        _ => Err(ResolveError::schema(
            "geneVariant term requires gene or chr/start/stop",
        )),
    }
}

fn mutation_values() -> BTreeMap<String, TermValue> {
    MUTATION_CLASSES
        .iter()
        .map(|(key, label)| {
            let mut value = TermValue::labeled(*label);
            value.uncomputable = *key == NOT_TESTED_CLASS;
            (key.to_string(), value)
        })
        .collect()
}

/// Every tested, non-wildtype class against wildtype; `None` when the
/// term lists no wildtype value.
fn default_groupset(values: &BTreeMap<String, TermValue>) -> Option<GroupSet> {
    if !values.contains_key(WILDTYPE_CLASS) {
        return None;
    }
    let mutated = values
        .iter()
        .filter(|(key, value)| key.as_str() != WILDTYPE_CLASS && !value.uncomputable)
        .map(|(key, _)| key.clone());
    Some(GroupSet::new(
        DEFAULT_GROUPSET_NAME,
        vec![
            Group::with_values("Mutated", mutated),
            Group::with_values("Wildtype", [WILDTYPE_CLASS]),
        ],
    ))
}

/// Derive the display name and id, the mutation-class values, and the
/// default groupset. An unspecified query uses the first groupset.
pub fn fill(raw: &mut RawTermWrapper) -> ResolveResult<()> {
    let term = &mut raw.term;
    let name = locus_name(term)?;
    if term.name.is_empty() {
        term.name = name.clone();
    }
    if term.id.is_empty() {
        term.id = name;
    }
    let values = term.values.get_or_insert_with(mutation_values);
    let groupset = default_groupset(values);
    let setting = term
        .groupsetting
        .get_or_insert_with(TermGroupSetting::default);
    if setting.lst.is_empty() {
        setting.lst.extend(groupset);
    }

    let q = &mut raw.q;
    if q.query_type.is_none() && !q.has("customset") {
        q.query_type = Some(Shape::PredefinedGroupSet);
        if !q.has("predefined_groupset_idx") {
            q.fields
                .insert("predefined_groupset_idx".to_string(), 0.into());
        }
    }
    Ok(())
}

pub fn resolve<V>(mut raw: RawTermWrapper, ctx: &KindContext<'_, V>) -> ResolveResult<TermWrapper> {
    fill(&mut raw)?;
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
