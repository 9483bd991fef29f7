use proptest::prelude::*;
use termwrap_core::config::TermwrapConfig;

proptest! {
    #[test]
    fn knot_percentiles_validate_iff_increasing_and_interior(
        knots in prop::collection::vec(-10.0f64..110.0, 0..6)
    ) {
        let mut config = TermwrapConfig::default();
        config.resolve.spline_knot_percentiles = knots.clone();
        let interior = knots.iter().all(|p| *p > 0.0 && *p < 100.0);
        let increasing = knots.windows(2).all(|w| w[0] < w[1]);
        prop_assert_eq!(
            TermwrapConfig::validate(&config).is_ok(),
            interior && increasing
        );
    }

    #[test]
    fn positive_max_bins_validate(max_bins in 1usize..100_000) {
        let mut config = TermwrapConfig::default();
        config.binning.max_bins = Some(max_bins);
        prop_assert!(TermwrapConfig::validate(&config).is_ok());
        prop_assert_eq!(config.binning.effective_max_bins(), max_bins);
    }

    #[test]
    fn toml_round_trip_preserves_config(
        max_bins in 1usize..10_000,
        digits in 0usize..5,
    ) {
        let mut config = TermwrapConfig::default();
        config.binning.max_bins = Some(max_bins);
        config.binning.default_rounding = Some(format!(".{digits}f"));
        let text = toml::to_string(&config).unwrap();
        let back = TermwrapConfig::from_toml(&text).unwrap();
        prop_assert_eq!(back, config);
    }
}
