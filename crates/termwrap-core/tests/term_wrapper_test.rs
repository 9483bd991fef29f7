//! Persisted term-wrapper form: tag derivation and lossless round trips.

use serde_json::json;
use termwrap_core::models::*;

fn values_query(mode: Mode) -> Query {
    Query::Values(ValuesQuery {
        common: QueryCommon {
            mode,
            ..Default::default()
        },
        grade: GradeOptions::default(),
    })
}

#[test]
fn tag_is_derived_from_term_and_query() {
    let tw = TermWrapper::assemble(
        "sex".into(),
        Term::new("sex", TermType::Categorical),
        values_query(Mode::Discrete),
        None,
    )
    .unwrap();
    assert_eq!(tw.tag(), TwTag::CatTWValues);

    let tw = TermWrapper::assemble(
        "rs123".into(),
        Term::new("rs123", TermType::Snp),
        values_query(Mode::Discrete),
        None,
    )
    .unwrap();
    assert_eq!(tw.tag(), TwTag::QualTWValues);
}

#[test]
fn incompatible_shape_is_rejected() {
    let err = TermWrapper::assemble(
        "age".into(),
        Term::new("age", TermType::Float),
        values_query(Mode::Discrete),
        None,
    )
    .unwrap_err();
    assert!(err.to_string().contains("cannot process tw"));
}

#[test]
fn json_round_trip_is_lossless() {
    let mut q = ContinuousQuery::default();
    q.common.mode = Mode::Continuous;
    q.scale = Some(10.0);
    let tw = TermWrapper::assemble(
        "agedx".into(),
        Term::new("agedx", TermType::Float),
        Query::Continuous(q),
        Some("tw-1".into()),
    )
    .unwrap();

    let value = serde_json::to_value(&tw).unwrap();
    assert_eq!(value["type"], json!("NumTWCont"));
    assert_eq!(value["$id"], json!("tw-1"));
    let back: TermWrapper = serde_json::from_value(value).unwrap();
    assert_eq!(back, tw);
    assert_eq!(back.clone(), tw);
}

#[test]
fn inconsistent_persisted_tag_fails() {
    let value = json!({
        "id": "sex",
        "type": "QualTWValues",
        "term": {"id": "sex", "type": "categorical"},
        "q": {"type": "values", "mode": "discrete", "hiddenValues": {}}
    });
    let result: Result<TermWrapper, _> = serde_json::from_value(value);
    assert!(result.is_err());
}

#[test]
fn to_raw_keeps_dispatch_fields() {
    let tw = TermWrapper::assemble(
        "sex".into(),
        Term::new("sex", TermType::Categorical),
        values_query(Mode::Binary),
        None,
    )
    .unwrap();
    let raw = tw.to_raw().unwrap();
    assert_eq!(raw.q.query_type, Some(Shape::Values));
    assert_eq!(raw.q.mode, Some(Mode::Binary));
    assert_eq!(raw.id.as_deref(), Some("sex"));
}
