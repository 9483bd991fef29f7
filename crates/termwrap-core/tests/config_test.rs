//! Tests for the termwrap configuration system.

use std::sync::Mutex;

use termwrap_core::config::{ConfigOverrides, TermwrapConfig};
use termwrap_core::errors::ConfigError;
use termwrap_core::models::TermKind;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all TERMWRAP_ env vars to prevent cross-test contamination.
fn clear_env_vars() {
    for key in ["TERMWRAP_BINNING_MAX_BINS", "TERMWRAP_RESOLVE_SPLINE_KNOTS"] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("termwrap.toml"),
        r#"
[binning]
max_bins = 50
default_rounding = ".1f"

[resolve]
spline_knot_percentiles = [10, 50, 90]
"#,
    )
    .unwrap();

    std::env::set_var("TERMWRAP_BINNING_MAX_BINS", "80");

    let overrides = ConfigOverrides {
        spline_knot_percentiles: Some(vec![20.0, 80.0]),
        ..Default::default()
    };
    let config = TermwrapConfig::load(dir.path(), Some(&overrides)).unwrap();

    // Env beats project file
    assert_eq!(config.binning.effective_max_bins(), 80);
    // Project file survives where nothing overrides it
    assert_eq!(config.binning.default_rounding.as_deref(), Some(".1f"));
    // Explicit overrides beat everything
    assert_eq!(
        config.resolve.effective_spline_knot_percentiles(),
        vec![20.0, 80.0]
    );

    clear_env_vars();
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let config = TermwrapConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.binning.effective_max_bins(), 1000);
    assert_eq!(config.resolve.effective_median_percentile(), 50.0);
    assert_eq!(
        config.resolve.effective_spline_knot_percentiles(),
        vec![5.0, 35.0, 65.0, 95.0]
    );
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("termwrap.toml"), "not = [valid").unwrap();
    match TermwrapConfig::load(dir.path(), None) {
        Err(ConfigError::ParseError { .. }) => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn test_invalid_env_value_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::env::set_var("TERMWRAP_BINNING_MAX_BINS", "many");
    let result = TermwrapConfig::load(dir.path(), None);
    clear_env_vars();
    match result {
        Err(ConfigError::InvalidValue { field, .. }) => {
            assert_eq!(field, "TERMWRAP_BINNING_MAX_BINS");
        }
        other => panic!("Expected InvalidValue, got: {:?}", other),
    }
}

#[test]
fn test_validation_rejects_zero_bins() {
    let config = TermwrapConfig::from_toml("[binning]\nmax_bins = 0\n").unwrap();
    let err = TermwrapConfig::validate(&config).unwrap_err();
    assert!(err.to_string().contains("binning.max_bins"));
}

#[test]
fn test_validation_rejects_unordered_knots() {
    let config =
        TermwrapConfig::from_toml("[resolve]\nspline_knot_percentiles = [50, 10]\n").unwrap();
    assert!(TermwrapConfig::validate(&config).is_err());

    let config =
        TermwrapConfig::from_toml("[resolve]\nspline_knot_percentiles = [0, 50]\n").unwrap();
    assert!(TermwrapConfig::validate(&config).is_err());
}

#[test]
fn test_validation_rejects_bad_rounding() {
    let config = TermwrapConfig::from_toml("[binning]\ndefault_rounding = \"2\"\n").unwrap();
    assert!(TermwrapConfig::validate(&config).is_err());
}

#[test]
fn test_default_q_tables_by_kind() {
    let config = TermwrapConfig::from_toml(
        r#"
[resolve.default_q.numeric]
mode = "continuous"

[resolve.default_q.categorical]
type = "values"
"#,
    )
    .unwrap();
    TermwrapConfig::validate(&config).unwrap();
    let numeric = config.resolve.default_q_for(TermKind::Numeric).unwrap();
    assert_eq!(numeric["mode"], serde_json::json!("continuous"));
    assert!(config.resolve.default_q_for(TermKind::Date).is_none());
}

#[test]
fn test_default_q_unknown_kind_rejected() {
    let config = TermwrapConfig::from_toml("[resolve.default_q.bogus]\nmode = \"binary\"\n").unwrap();
    let err = TermwrapConfig::validate(&config).unwrap_err();
    assert!(err.to_string().contains("resolve.default_q.bogus"));
}
