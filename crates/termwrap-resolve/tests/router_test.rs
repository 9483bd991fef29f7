//! Discrete-kind resolution through the router: routing, binary-mode
//! checks, legacy input, and round trips.

use serde_json::json;
use termwrap_core::errors::{error_code, ResolveError, TwErrorCode};
use termwrap_core::models::{Mode, Query, Shape, TermKind, TermWrapper, TwTag};
use termwrap_core::TermwrapConfig;
use termwrap_resolve::Router;
use test_fixtures::load_tw;

// ── Routing ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn unspecified_categorical_query_lists_values() {
    let router = Router::default();
    let resolved = router.resolve_value(load_tw("categorical_sex")).await.unwrap();
    assert_eq!(resolved.tw.tag(), TwTag::CatTWValues);
    assert_eq!(resolved.tw.id, "sex");
    assert_eq!(resolved.tw.q.mode(), Mode::Discrete);
    assert!(resolved.tw.q.common().is_atomic);
}

#[tokio::test]
async fn predefined_groupset_by_index() {
    let router = Router::default();
    let mut input = load_tw("categorical_sex");
    input["q"] = json!({"type": "predefined-groupset", "predefined_groupset_idx": 0, "mode": "binary"});
    let resolved = router.resolve_value(input).await.unwrap();
    assert_eq!(resolved.tw.tag(), TwTag::CatTWPredefinedGS);

    let mut input = load_tw("categorical_sex");
    input["q"] = json!({"predefined_groupset_idx": 4});
    let err = router.resolve_value(input).await.unwrap_err();
    assert_eq!(err.error_code(), error_code::INVARIANT_VIOLATION);
    assert!(err.to_string().contains("index 4"));
}

#[tokio::test]
async fn qualitative_terms_share_the_discrete_shapes() {
    let router = Router::default();
    let resolved = router
        .resolve_value(json!({
            "term": {"id": "rs6025", "type": "snp", "values": {"AA": {}, "AG": {}, "GG": {}}},
            "q": {}
        }))
        .await
        .unwrap();
    assert_eq!(resolved.tw.tag(), TwTag::QualTWValues);
}

#[tokio::test]
async fn bins_on_a_categorical_term_are_a_routing_miss() {
    let router = Router::default();
    let mut input = load_tw("categorical_sex");
    input["q"] = json!({"type": "regular-bin", "bin_size": 5});
    let err = router.resolve_value(input).await.unwrap_err();
    assert!(matches!(err, ResolveError::RoutingMiss { .. }));
    assert_eq!(err.error_code(), error_code::ROUTING_MISS);
    assert_eq!(
        err.to_string(),
        "cannot process tw: categorical terms do not take q.type='regular-bin'"
    );
}

#[tokio::test]
async fn unsupported_mode_is_an_invariant_violation() {
    let router = Router::default();
    let mut input = load_tw("categorical_sex");
    input["q"] = json!({"mode": "cuminc"});
    let err = router.resolve_value(input).await.unwrap_err();
    assert_eq!(err.error_code(), error_code::INVARIANT_VIOLATION);
    assert!(err.to_string().contains("mode 'cuminc'"));
}

#[tokio::test]
async fn malformed_input_is_a_schema_error() {
    let router = Router::default();
    let err = router.resolve_value(json!({"q": {}})).await.unwrap_err();
    assert_eq!(err.to_string(), "missing tw.term");
    let err = router.resolve_value(json!("sex")).await.unwrap_err();
    assert_eq!(err.to_string(), "tw must be an object");
    let err = router
        .resolve_value(json!({"term": {"id": "x", "type": "nonsense"}}))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), error_code::SCHEMA_ERROR);
}

// ── Binary mode ──────────────────────────────────────────────────────────

#[tokio::test]
async fn binary_mode_needs_exactly_two_values() {
    let router = Router::default();
    let err = router
        .resolve_value(load_tw("categorical_binary_three_values"))
        .await
        .unwrap_err();
    assert_eq!(err, ResolveError::invariant("term.values must have exactly two keys"));

    let mut input = load_tw("categorical_sex");
    input["q"] = json!({"mode": "binary"});
    let resolved = router.resolve_value(input).await.unwrap();
    assert_eq!(resolved.tw.q.mode(), Mode::Binary);
}

#[tokio::test]
async fn binary_custom_groupset_needs_exactly_two_groups() {
    let router = Router::default();
    let mut input = load_tw("categorical_binary_three_values");
    input["q"] = json!({
        "mode": "binary",
        "customset": {"groups": [
            {"name": "a", "values": [{"key": "ALL"}]},
            {"name": "b", "values": [{"key": "AML"}]},
            {"name": "c", "values": [{"key": "HL"}]}
        ]}
    });
    let err = router.resolve_value(input).await.unwrap_err();
    assert_eq!(err.to_string(), "there must be exactly two groups in binary mode");
}

#[tokio::test]
async fn custom_groupset_without_customset_fails() {
    let router = Router::default();
    let mut input = load_tw("categorical_sex");
    input["q"] = json!({"type": "custom-groupset"});
    let err = router.resolve_value(input).await.unwrap_err();
    assert_eq!(err.to_string(), "custom groupset missing its customset");
}

#[tokio::test]
async fn disabled_groupsetting_forbids_groupsets() {
    let router = Router::default();
    let mut input = load_tw("categorical_sex");
    input["term"]["groupsetting"]["disabled"] = json!(true);
    input["q"] = json!({"predefined_groupset_idx": 0});
    let err = router.resolve_value(input).await.unwrap_err();
    assert!(err.to_string().contains("groupsetting is disabled"));
}

// ── Legacy input ─────────────────────────────────────────────────────────

#[tokio::test]
async fn unused_legacy_groupsetting_resolves_to_values() {
    let router = Router::default();
    let resolved = router
        .resolve_value(load_tw("legacy_groupsetting_unused"))
        .await
        .unwrap();
    assert_eq!(resolved.tw.q.shape(), Shape::Values);
    let json = serde_json::to_value(&resolved).unwrap();
    assert_eq!(json["q"]["type"], "values");
    assert!(json["q"].get("groupsetting").is_none());
}

#[tokio::test]
async fn legacy_customset_becomes_a_custom_groupset() {
    let router = Router::default();
    let resolved = router
        .resolve_value(load_tw("legacy_groupsetting_custom"))
        .await
        .unwrap();
    assert_eq!(resolved.tw.tag(), TwTag::CatTWCustomGS);
    assert_eq!(resolved.tw.id, "diaggrp");
    let Query::CustomGroupSet(q) = &resolved.tw.q else {
        panic!("expected a custom groupset, got {:?}", resolved.tw.q);
    };
    assert_eq!(q.customset.groups[0].name, "Leukemia");
}

// ── Determinism and round trips ──────────────────────────────────────────

#[tokio::test]
async fn resolution_is_deterministic() {
    let router = Router::default();
    for name in ["categorical_sex", "legacy_groupsetting_custom", "condition_ae", "gene_variant_tp53"] {
        let a = router.resolve_value(load_tw(name)).await.unwrap();
        let b = router.resolve_value(load_tw(name)).await.unwrap();
        assert_eq!(a.tw, b.tw, "fixture {name}");
        assert_eq!(a.tw.tag(), b.tw.tag());
    }
}

#[tokio::test]
async fn json_round_trip_re_resolves_to_the_same_tag() {
    let router = Router::default();
    for name in [
        "categorical_sex",
        "legacy_groupsetting_custom",
        "condition_ae",
        "gene_variant_tp53",
        "term_collection_signature",
    ] {
        let resolved = router.resolve_value(load_tw(name)).await.unwrap();
        let json = serde_json::to_value(&resolved).unwrap();

        let persisted: TermWrapper = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(persisted, resolved.tw, "fixture {name}");

        let again = router.resolve_value(json).await.unwrap();
        assert_eq!(again.tw.tag(), resolved.tw.tag(), "fixture {name}");
        assert_eq!(again.tw.q, resolved.tw.q, "fixture {name}");

        let cloned = resolved.clone();
        let again = router.reresolve(&cloned.tw).await.unwrap();
        assert_eq!(again.tw, resolved.tw, "fixture {name}");
    }
}

#[tokio::test]
async fn persisted_tag_must_match_its_parts() {
    let router = Router::default();
    let resolved = router.resolve_value(load_tw("categorical_sex")).await.unwrap();
    let mut json = serde_json::to_value(&resolved).unwrap();
    json["type"] = json!("CatTWCustomGS");
    let err = serde_json::from_value::<TermWrapper>(json).unwrap_err();
    assert!(err.to_string().contains("disagrees"));
}

#[tokio::test]
async fn raw_type_tag_is_ignored() {
    let router = Router::default();
    let mut input = load_tw("categorical_sex");
    input["type"] = json!("NumTWSpline");
    let resolved = router.resolve_value(input).await.unwrap();
    assert_eq!(resolved.tw.tag(), TwTag::CatTWValues);
}

#[tokio::test]
async fn unknown_query_keys_are_dropped() {
    let router = Router::default();
    let mut input = load_tw("categorical_sex");
    input["q"] = json!({"type": "values", "bin_size": 5, "colorScale": "viridis"});
    let resolved = router.resolve_value(input).await.unwrap();
    let json = serde_json::to_value(&resolved).unwrap();
    assert!(json["q"].get("bin_size").is_none());
    assert!(json["q"].get("colorScale").is_none());
}

// ── Configured default queries ───────────────────────────────────────────

#[tokio::test]
async fn configured_default_query_fills_absent_keys_only() {
    let mut config = TermwrapConfig::default();
    config.resolve.set_default_q(
        TermKind::Categorical,
        json!({"mode": "binary"}).as_object().unwrap().clone(),
    );
    let router = Router::default().with_config(config);

    let resolved = router.resolve_value(load_tw("categorical_sex")).await.unwrap();
    assert_eq!(resolved.tw.q.mode(), Mode::Binary);

    let mut input = load_tw("categorical_sex");
    input["q"] = json!({"mode": "discrete"});
    let resolved = router.resolve_value(input).await.unwrap();
    assert_eq!(resolved.tw.q.mode(), Mode::Discrete);
}
