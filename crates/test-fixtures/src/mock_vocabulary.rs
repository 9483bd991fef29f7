use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use termwrap_binning::ValueSummary;
use termwrap_core::errors::{ResolveError, ResolveResult};
use termwrap_core::models::{PercentileValues, RawTermWrapper, TermBins};
use termwrap_core::traits::Vocabulary;

/// In-memory vocabulary with per-term bins and observed values.
///
/// Counts every capability call, and can be told to fail them all.
#[derive(Debug, Default)]
pub struct MockVocabulary {
    bins: BTreeMap<String, TermBins>,
    values: BTreeMap<String, ValueSummary>,
    failure: Option<String>,
    set_term_bins_calls: AtomicUsize,
    get_percentile_calls: AtomicUsize,
}

impl MockVocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bins `set_term_bins` supplies for `term_id`.
    pub fn with_bins(mut self, term_id: &str, bins: TermBins) -> Self {
        self.bins.insert(term_id.to_string(), bins);
        self
    }

    /// Bins from JSON; panics on malformed input.
    pub fn with_bins_json(self, term_id: &str, bins: serde_json::Value) -> Self {
        let bins = serde_json::from_value(bins).expect("valid term bins");
        self.with_bins(term_id, bins)
    }

    /// Observed values `get_percentile` is answered from.
    pub fn with_values(mut self, term_id: &str, values: impl IntoIterator<Item = f64>) -> Self {
        self.values
            .insert(term_id.to_string(), ValueSummary::new(values));
        self
    }

    /// Make every capability call fail with `reason`.
    pub fn failing(mut self, reason: &str) -> Self {
        self.failure = Some(reason.to_string());
        self
    }

    pub fn set_term_bins_calls(&self) -> usize {
        self.set_term_bins_calls.load(Ordering::SeqCst)
    }

    pub fn get_percentile_calls(&self) -> usize {
        self.get_percentile_calls.load(Ordering::SeqCst)
    }

    fn check_failure(&self, capability: &str) -> ResolveResult<()> {
        match &self.failure {
            Some(reason) => Err(ResolveError::remote_fetch(capability, reason.clone())),
            None => Ok(()),
        }
    }
}

impl Vocabulary for MockVocabulary {
    async fn set_term_bins(&self, tw: &mut RawTermWrapper) -> ResolveResult<()> {
        self.set_term_bins_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure("set_term_bins")?;
        let bins = self.bins.get(&tw.term.id).ok_or_else(|| {
            ResolveError::remote_fetch("set_term_bins", format!("no bins for term {}", tw.term.id))
        })?;
        tw.term.bins = Some(bins.clone());
        Ok(())
    }

    async fn get_percentile(
        &self,
        term_id: &str,
        percentiles: &[f64],
    ) -> ResolveResult<PercentileValues> {
        self.get_percentile_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure("get_percentile")?;
        let summary = self.values.get(term_id).ok_or_else(|| {
            ResolveError::remote_fetch("get_percentile", format!("no values for term {term_id}"))
        })?;
        let values = percentiles
            .iter()
            .map(|p| {
                summary.percentile(*p).ok_or_else(|| {
                    ResolveError::remote_fetch(
                        "get_percentile",
                        format!("term {term_id} has no observed values"),
                    )
                })
            })
            .collect::<ResolveResult<Vec<f64>>>()?;
        Ok(PercentileValues { values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termwrap_core::models::{Term, TermType};

    #[tokio::test]
    async fn percentiles_come_from_registered_values() {
        let vocab = MockVocabulary::new().with_values("age", (1..=100).map(f64::from));
        let p = vocab.get_percentile("age", &[50.0, 90.0]).await.unwrap();
        assert_eq!(p.values, vec![50.0, 90.0]);
        assert_eq!(vocab.get_percentile_calls(), 1);
    }

    #[tokio::test]
    async fn failures_are_remote_fetch_errors() {
        let vocab = MockVocabulary::new().failing("offline");
        let mut tw = RawTermWrapper::new(Term::new("age", TermType::Float));
        let err = vocab.set_term_bins(&mut tw).await.unwrap_err();
        assert!(matches!(err, ResolveError::RemoteFetch { .. }));
        assert_eq!(vocab.set_term_bins_calls(), 1);
    }
}
