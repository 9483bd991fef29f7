//! Vocabulary capability: the two remote lookups resolution may await.

use crate::errors::{ResolveError, ResolveResult};
use crate::models::{PercentileValues, RawTermWrapper};

/// Remote vocabulary lookups needed during resolution.
///
/// Implementations talk to whatever backs the vocabulary; resolution only
/// suspends at these two calls.
#[allow(async_fn_in_trait)]
pub trait Vocabulary: Send + Sync {
    /// Fill `tw.term.bins` with the server-derived default bin presets.
    async fn set_term_bins(&self, tw: &mut RawTermWrapper) -> ResolveResult<()>;

    /// One value per requested percentile of the term's observed values.
    async fn get_percentile(
        &self,
        term_id: &str,
        percentiles: &[f64],
    ) -> ResolveResult<PercentileValues>;
}

/// Vocabulary for callers that only resolve fully specified wrappers.
/// Any lookup fails with a remote-fetch error.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVocabulary;

impl Vocabulary for NoVocabulary {
    async fn set_term_bins(&self, tw: &mut RawTermWrapper) -> ResolveResult<()> {
        Err(ResolveError::remote_fetch(
            "set_term_bins",
            format!("no vocabulary configured to supply bins for term {}", tw.term.id),
        ))
    }

    async fn get_percentile(
        &self,
        term_id: &str,
        _percentiles: &[f64],
    ) -> ResolveResult<PercentileValues> {
        Err(ResolveError::remote_fetch(
            "get_percentile",
            format!("no vocabulary configured to supply percentiles for term {term_id}"),
        ))
    }
}

impl<V: Vocabulary> Vocabulary for std::sync::Arc<V> {
    async fn set_term_bins(&self, tw: &mut RawTermWrapper) -> ResolveResult<()> {
        (**self).set_term_bins(tw).await
    }

    async fn get_percentile(
        &self,
        term_id: &str,
        percentiles: &[f64],
    ) -> ResolveResult<PercentileValues> {
        (**self).get_percentile(term_id, percentiles).await
    }
}
