use termwrap_core::models::BinSpec;

/// The distinct `start_percentile`/`stop_percentile` values of a spec's
/// first and last bins, in encounter order. Explicit bounds that shadow a
/// percentile are resolved later, in generation.
pub fn target_percentiles(spec: &BinSpec) -> Vec<f64> {
    let fb = &spec.first_bin;
    let mut candidates = vec![fb.start_percentile, fb.stop_percentile];
    if let Some(lb) = &spec.last_bin {
        candidates.push(lb.start_percentile);
        candidates.push(lb.stop_percentile);
    }

    let mut out: Vec<f64> = Vec::new();
    for p in candidates.into_iter().flatten() {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_spec;
    use serde_json::json;

    #[test]
    fn percentiles_are_distinct_and_ordered() {
        let spec = parse_spec(&json!({
            "bin_size": 5,
            "first_bin": {"start_percentile": 10},
            "last_bin": {"start_percentile": 90, "stop_percentile": 10}
        }))
        .unwrap();
        assert_eq!(target_percentiles(&spec), vec![10.0, 90.0]);
    }

    #[test]
    fn shadowed_percentiles_are_still_listed() {
        let spec = parse_spec(&json!({
            "bin_size": 5,
            "first_bin": {"start": 3, "start_percentile": 10},
        }))
        .unwrap();
        assert_eq!(target_percentiles(&spec), vec![10.0]);
    }
}
