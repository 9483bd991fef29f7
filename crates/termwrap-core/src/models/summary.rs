use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::flags::format_number;

/// Summary statistics for a term's observed values: min, max, and the
/// requested percentiles keyed `p<N>`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    #[serde(flatten)]
    pub percentiles: BTreeMap<String, f64>,
}

impl Summary {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            percentiles: BTreeMap::new(),
        }
    }

    pub fn with_percentile(mut self, percentile: f64, value: f64) -> Self {
        self.percentiles.insert(percentile_key(percentile), value);
        self
    }

    pub fn percentile(&self, percentile: f64) -> Option<f64> {
        self.percentiles.get(&percentile_key(percentile)).copied()
    }
}

/// `10.0` → `"p10"`, `27.5` → `"p27.5"`.
pub fn percentile_key(percentile: f64) -> String {
    format!("p{}", format_number(percentile))
}

/// Response of the vocabulary percentile capability, one value per
/// requested percentile in request order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PercentileValues {
    pub values: Vec<f64>,
}
