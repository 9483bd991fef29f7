//! Top-level termwrap configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{BinningConfig, ResolveConfig};
use crate::constants::CONFIG_FILENAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`TERMWRAP_*`)
/// 3. Project config (`termwrap.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TermwrapConfig {
    pub binning: BinningConfig,
    pub resolve: ResolveConfig,
}

/// Caller-supplied overrides that win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub max_bins: Option<usize>,
    pub spline_knot_percentiles: Option<Vec<f64>>,
}

impl TermwrapConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join(CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): explicit overrides
        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &TermwrapConfig) -> Result<(), ConfigError> {
        if config.binning.max_bins == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "binning.max_bins".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(rounding) = &config.binning.default_rounding {
            if parse_rounding(rounding).is_none() {
                return Err(ConfigError::ValidationFailed {
                    field: "binning.default_rounding".to_string(),
                    message: format!("expected a format like \".2f\", got {rounding:?}"),
                });
            }
        }
        if let Some(p) = config.resolve.median_percentile {
            if !(p > 0.0 && p < 100.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "resolve.median_percentile".to_string(),
                    message: "must be between 0 and 100 (exclusive)".to_string(),
                });
            }
        }
        if let Some(kind) = config
            .resolve
            .default_q
            .keys()
            .find(|k| !KNOWN_KINDS.contains(&k.as_str()))
        {
            return Err(ConfigError::ValidationFailed {
                field: format!("resolve.default_q.{kind}"),
                message: "not a term kind".to_string(),
            });
        }
        let knots = &config.resolve.spline_knot_percentiles;
        if knots.iter().any(|p| !(*p > 0.0 && *p < 100.0)) {
            return Err(ConfigError::ValidationFailed {
                field: "resolve.spline_knot_percentiles".to_string(),
                message: "percentiles must be between 0 and 100 (exclusive)".to_string(),
            });
        }
        if knots.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::ValidationFailed {
                field: "resolve.spline_knot_percentiles".to_string(),
                message: "percentiles must be strictly increasing".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut TermwrapConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: TermwrapConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` sets them.
    fn merge(base: &mut TermwrapConfig, other: &TermwrapConfig) {
        // Binning
        if other.binning.max_bins.is_some() {
            base.binning.max_bins = other.binning.max_bins;
        }
        if other.binning.default_rounding.is_some() {
            base.binning.default_rounding = other.binning.default_rounding.clone();
        }

        // Resolve
        if other.resolve.median_percentile.is_some() {
            base.resolve.median_percentile = other.resolve.median_percentile;
        }
        if !other.resolve.spline_knot_percentiles.is_empty() {
            base.resolve.spline_knot_percentiles = other.resolve.spline_knot_percentiles.clone();
        }
        for (kind, q) in &other.resolve.default_q {
            base.resolve.default_q.insert(kind.clone(), q.clone());
        }
    }

    /// Apply `TERMWRAP_*` environment variables.
    fn apply_env_overrides(config: &mut TermwrapConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("TERMWRAP_BINNING_MAX_BINS") {
            let parsed = val.parse::<usize>().map_err(|e| ConfigError::InvalidValue {
                field: "TERMWRAP_BINNING_MAX_BINS".to_string(),
                message: e.to_string(),
            })?;
            config.binning.max_bins = Some(parsed);
        }
        if let Ok(val) = std::env::var("TERMWRAP_RESOLVE_SPLINE_KNOTS") {
            let parsed = val
                .split(',')
                .map(|s| s.trim().parse::<f64>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| ConfigError::InvalidValue {
                    field: "TERMWRAP_RESOLVE_SPLINE_KNOTS".to_string(),
                    message: e.to_string(),
                })?;
            config.resolve.spline_knot_percentiles = parsed;
        }
        Ok(())
    }

    /// Apply explicit overrides to the config.
    pub fn apply_overrides(config: &mut TermwrapConfig, overrides: &ConfigOverrides) {
        if let Some(max_bins) = overrides.max_bins {
            config.binning.max_bins = Some(max_bins);
        }
        if let Some(knots) = &overrides.spline_knot_percentiles {
            config.resolve.spline_knot_percentiles = knots.clone();
        }
    }
}

const KNOWN_KINDS: [&str; 7] = [
    "categorical",
    "qualitative",
    "numeric",
    "date",
    "condition",
    "geneVariant",
    "termCollection",
];

/// Number of decimals in a `.Nf` rounding directive.
pub fn parse_rounding(rounding: &str) -> Option<usize> {
    rounding
        .strip_prefix('.')
        .and_then(|r| r.strip_suffix('f'))
        .and_then(|n| n.parse::<usize>().ok())
}
