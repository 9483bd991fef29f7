use serde::{Deserialize, Serialize};

use super::defaults;

/// Bin generation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BinningConfig {
    /// Upper bound on generated bins per spec. Default: 1000.
    pub max_bins: Option<usize>,
    /// Label rounding (`.Nf`) applied when neither the spec nor the term sets one.
    pub default_rounding: Option<String>,
}

impl BinningConfig {
    /// Returns the effective bin limit, defaulting to 1000.
    pub fn effective_max_bins(&self) -> usize {
        self.max_bins.unwrap_or(defaults::DEFAULT_MAX_BINS)
    }
}
