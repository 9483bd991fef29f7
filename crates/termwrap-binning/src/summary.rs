//! Percentile oracle over an in-memory list of observed values.

use termwrap_core::errors::BinError;
use termwrap_core::models::Summary;
use termwrap_core::traits::PercentileOracle;

/// Nearest-rank percentiles of a fixed value list.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSummary {
    sorted: Vec<f64>,
}

impl ValueSummary {
    /// Non-finite values are dropped.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let mut sorted: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        sorted.sort_by(f64::total_cmp);
        Self { sorted }
    }

    /// Every integer from `min` to `max` inclusive.
    pub fn integer_range(min: i64, max: i64) -> Self {
        Self::new((min..=max).map(|v| v as f64))
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Nearest-rank percentile; `None` for an empty list.
    pub fn percentile(&self, p: f64) -> Option<f64> {
        if self.sorted.is_empty() {
            return None;
        }
        let n = self.sorted.len();
        let rank = ((p / 100.0) * n as f64).ceil() as usize;
        let idx = rank.clamp(1, n) - 1;
        Some(self.sorted[idx])
    }
}

impl PercentileOracle for ValueSummary {
    fn summarize(&self, percentiles: &[f64]) -> Result<Summary, BinError> {
        let (Some(min), Some(max)) = (self.sorted.first(), self.sorted.last()) else {
            return Err(BinError::schema("cannot summarize an empty value list"));
        };
        let mut summary = Summary::new(*min, *max);
        for p in percentiles {
            if let Some(v) = self.percentile(*p) {
                summary = summary.with_percentile(*p, v);
            }
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_rank_percentiles() {
        let s = ValueSummary::integer_range(1, 10);
        assert_eq!(s.percentile(50.0), Some(5.0));
        assert_eq!(s.percentile(100.0), Some(10.0));
        assert_eq!(s.percentile(1.0), Some(1.0));
        let summary = s.summarize(&[50.0]).unwrap();
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 10.0);
        assert_eq!(summary.percentile(50.0), Some(5.0));
    }

    #[test]
    fn empty_list_cannot_be_summarized() {
        let s = ValueSummary::new(Vec::new());
        assert!(s.summarize(&[]).is_err());
    }
}
