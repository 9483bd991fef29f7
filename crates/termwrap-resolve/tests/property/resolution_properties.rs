use proptest::prelude::*;
use serde_json::{json, Map, Value};
use termwrap_core::models::TwTag;
use termwrap_core::ResolveResult;
use termwrap_resolve::{Resolved, Router};

fn block_on(value: Value) -> ResolveResult<Resolved> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    runtime.block_on(Router::default().resolve_value(value))
}

fn categorical(n: usize, mode: &str) -> Value {
    let values: Map<String, Value> = (0..n)
        .map(|i| (format!("v{i}"), json!({"label": format!("Value {i}")})))
        .collect();
    json!({
        "term": {"id": "cat", "name": "Category", "type": "categorical", "values": values},
        "q": {"mode": mode}
    })
}

proptest! {
    #[test]
    fn binary_categorical_needs_exactly_two_values(n in 0usize..6) {
        let result = block_on(categorical(n, "binary"));
        prop_assert_eq!(result.is_ok(), n == 2);
    }

    #[test]
    fn discrete_categorical_always_resolves_to_values(n in 0usize..6) {
        let resolved = block_on(categorical(n, "discrete")).unwrap();
        prop_assert_eq!(resolved.tw.tag(), TwTag::CatTWValues);
    }

    #[test]
    fn regular_bins_survive_a_round_trip(
        bin_size in 1u32..50,
        stop in 0i32..100,
        stopinclusive in any::<bool>(),
    ) {
        let input = json!({
            "term": {"id": "agedx", "type": "float"},
            "q": {
                "bin_size": bin_size,
                "stopinclusive": stopinclusive,
                "first_bin": {"startunbounded": true, "stop": stop}
            }
        });
        let first = block_on(input.clone()).unwrap();
        let again = block_on(input).unwrap();
        prop_assert_eq!(&first.tw, &again.tw);

        let persisted = serde_json::to_value(&first).unwrap();
        let reloaded = block_on(persisted).unwrap();
        prop_assert_eq!(reloaded.tw, first.tw);
    }
}
