//! Graded conditions (adverse events, diagnoses) whose values are grades.

use std::collections::BTreeMap;

use termwrap_core::errors::{ResolveError, ResolveResult};
use termwrap_core::models::{
    GradeOptions, Mode, Query, RawQuery, RawTermWrapper, Shape, Term, TermValue, TermWrapper,
};

use super::{complete, KindContext, ShapeStage};
use crate::base::take_flag;

/// Grade labels a condition term gets when the vocabulary lists none.
const DEFAULT_GRADES: [(&str, &str); 6] = [
    ("0", "0: No condition"),
    ("1", "1: Mild"),
    ("2", "2: Moderate"),
    ("3", "3: Severe"),
    ("4", "4: Life-threatening"),
    ("5", "5: Death"),
];

fn modes(shape: Shape) -> &'static [Mode] {
    match shape {
        Shape::Values => &[Mode::Discrete, Mode::Binary, Mode::Cuminc, Mode::Cox],
        _ => &[Mode::Discrete, Mode::Binary],
    }
}

pub fn fill(raw: &mut RawTermWrapper) {
    raw.term.values.get_or_insert_with(|| {
        DEFAULT_GRADES
            .iter()
            .map(|(grade, label)| (grade.to_string(), TermValue::labeled(*label)))
            .collect::<BTreeMap<_, _>>()
    });
    let q = &mut raw.q;
    if q.query_type.is_none() && !q.has("predefined_groupset_idx") && !q.has("customset") {
        q.query_type = Some(Shape::Values);
    }
}

/// Take the grade settings out of `q`, defaulting to max grade per patient,
/// bars by grade.
pub fn grade_options(term: &Term, q: &mut RawQuery) -> ResolveResult<GradeOptions> {
    let mut grade = GradeOptions {
        value_by_max_grade: take_flag(q, "value_by_max_grade")?,
        value_by_most_recent: take_flag(q, "value_by_most_recent")?,
        value_by_computable_grade: take_flag(q, "value_by_computable_grade")?,
        bar_by_grade: take_flag(q, "bar_by_grade")?,
        bar_by_children: take_flag(q, "bar_by_children")?,
        breaks: q.take("breaks")?.unwrap_or_default(),
        time_scale: q.take("timeScale")?,
    };

    let value_by = [
        grade.value_by_max_grade,
        grade.value_by_most_recent,
        grade.value_by_computable_grade,
    ];
    match value_by.iter().filter(|set| **set).count() {
        0 => grade.value_by_max_grade = true,
        1 => {}
        _ => {
            return Err(ResolveError::invariant(
                "only one value_by_* option may be set on a condition query",
            ))
        }
    }

    match (grade.bar_by_grade, grade.bar_by_children) {
        (false, false) => grade.bar_by_grade = true,
        (true, true) => {
            return Err(ResolveError::invariant(
                "bar_by_grade and bar_by_children are mutually exclusive",
            ))
        }
        _ => {}
    }
    if grade.bar_by_children && term.isleaf == Some(true) {
        return Err(ResolveError::invariant(format!(
            "bar_by_children requires a non-leaf term, but {} is a leaf",
            term.id
        )));
    }

    if grade.breaks.windows(2).any(|w| w[0] >= w[1]) {
        return Err(ResolveError::invariant(
            "grade breaks must be strictly increasing",
        ));
    }
    Ok(grade)
}

/// Break counts each mode needs when grades are the values.
fn check_breaks(q: &Query) -> ResolveResult<()> {
    let Query::Values(values) = q else {
        return Ok(());
    };
    let count = values.grade.breaks.len();
    match values.common.mode {
        Mode::Binary | Mode::Cox if count != 1 => Err(ResolveError::invariant(format!(
            "{} mode requires exactly one grade break, found {count}",
            values.common.mode
        ))),
        Mode::Cuminc if count == 0 => Err(ResolveError::invariant(
            "cuminc mode requires at least one grade break",
        )),
        _ => Ok(()),
    }
}

pub fn resolve<V>(mut raw: RawTermWrapper, ctx: &KindContext<'_, V>) -> ResolveResult<TermWrapper> {
    fill(&mut raw);
    let grade = grade_options(&raw.term, &mut raw.q)?;
    let tw = complete(
        raw,
        ShapeStage {
            candidates: &Shape::DISCRETE,
            modes,
            grade,
        },
        ctx,
    )?;
    check_breaks(&tw.q)?;
    Ok(tw)
}
