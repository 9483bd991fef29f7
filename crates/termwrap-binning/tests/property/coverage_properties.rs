use proptest::prelude::*;
use serde_json::json;
use termwrap_binning::{compute_bins, Bin, ValueSummary};

fn bin_size() -> impl Strategy<Value = f64> {
    prop::sample::select(vec![0.5, 1.0, 2.0, 2.5, 3.0, 5.0, 7.0, 10.0])
}

fn containing(bins: &[Bin], value: f64) -> usize {
    bins.iter().filter(|b| b.contains(value)).count()
}

proptest! {
    #[test]
    fn anchored_bins_cover_each_value_once(
        max in 1i64..200,
        start_frac in 0.0f64..1.0,
        size in bin_size(),
        right_closed in any::<bool>(),
    ) {
        let start = (start_frac * max as f64).floor();
        let spec = if right_closed {
            json!({"bin_size": size, "first_bin": {"start": start}, "stopinclusive": true})
        } else {
            json!({"bin_size": size, "first_bin": {"start": start}})
        };
        let domain = ValueSummary::integer_range(0, max);
        let bins = compute_bins(&spec, &domain).unwrap();
        let anchor = if start == 0.0 || !right_closed { start } else { start + 1.0 };
        let mut v = anchor;
        while v <= max as f64 {
            prop_assert_eq!(containing(&bins, v), 1, "value {} in {:?}", v, bins);
            v += 1.0;
        }
    }

    #[test]
    fn open_first_bin_covers_everything_up_to_max(
        max in 1i64..200,
        stop_frac in 0.01f64..1.2,
        size in bin_size(),
    ) {
        let stop = (stop_frac * max as f64).ceil();
        let spec = json!({"bin_size": size, "first_bin": {"startunbounded": true, "stop": stop}});
        let domain = ValueSummary::integer_range(0, max);
        let bins = compute_bins(&spec, &domain).unwrap();
        for v in 0..=max {
            prop_assert_eq!(containing(&bins, v as f64), 1, "value {} in {:?}", v, bins);
        }
    }

    #[test]
    fn neighbours_share_their_boundary(
        max in 1i64..200,
        size in bin_size(),
    ) {
        let domain = ValueSummary::integer_range(0, max);
        let bins = compute_bins(&json!({"bin_size": size, "first_bin": {"start": 0}}), &domain).unwrap();
        for pair in bins.windows(2) {
            prop_assert_eq!(pair[0].stop, pair[1].start);
            prop_assert!(pair[0].stopinclusive != pair[1].startinclusive);
        }
    }

    #[test]
    fn generation_is_deterministic(
        max in 1i64..200,
        size in bin_size(),
        start_frac in 0.0f64..1.0,
    ) {
        let start = (start_frac * max as f64).floor();
        let spec = json!({"bin_size": size, "first_bin": {"start": start}});
        let domain = ValueSummary::integer_range(0, max);
        let a = compute_bins(&spec, &domain).unwrap();
        let b = compute_bins(&spec, &domain).unwrap();
        prop_assert_eq!(a, b);
    }
}
