use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::defaults;
use crate::models::TermKind;

/// Term-wrapper resolution configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResolveConfig {
    /// Percentile used by `preferredBins = "median"`. Default: 50.
    pub median_percentile: Option<f64>,
    /// Percentiles placing default spline knots. Default: 5, 35, 65, 95.
    #[serde(default)]
    pub spline_knot_percentiles: Vec<f64>,
    /// Per-kind default query fields merged under a raw query, keyed by
    /// kind name (`categorical`, `numeric`, ...).
    #[serde(default)]
    pub default_q: BTreeMap<String, Map<String, Value>>,
}

impl ResolveConfig {
    pub fn effective_median_percentile(&self) -> f64 {
        self.median_percentile
            .unwrap_or(defaults::DEFAULT_MEDIAN_PERCENTILE)
    }

    pub fn effective_spline_knot_percentiles(&self) -> Vec<f64> {
        if self.spline_knot_percentiles.is_empty() {
            defaults::DEFAULT_SPLINE_KNOT_PERCENTILES.to_vec()
        } else {
            self.spline_knot_percentiles.clone()
        }
    }

    /// Default query fields for `kind`, if configured.
    pub fn set_default_q(&mut self, kind: TermKind, q: Map<String, Value>) {
        self.default_q.insert(kind.as_str().to_string(), q);
    }

    pub fn default_q_for(&self, kind: TermKind) -> Option<&Map<String, Value>> {
        self.default_q.get(kind.as_str())
    }
}
