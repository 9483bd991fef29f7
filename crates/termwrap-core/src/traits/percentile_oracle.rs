use crate::errors::BinError;
use crate::models::Summary;

/// Answers percentile/min/max queries for one term's observed values.
///
/// Bin generation asks for every percentile it needs in a single call.
pub trait PercentileOracle {
    /// Summary holding `min`, `max`, and one `p<N>` entry per requested percentile.
    fn summarize(&self, percentiles: &[f64]) -> Result<Summary, BinError>;
}

/// An already-fetched summary serves as its own oracle.
impl PercentileOracle for Summary {
    fn summarize(&self, _percentiles: &[f64]) -> Result<Summary, BinError> {
        Ok(self.clone())
    }
}

impl<T: PercentileOracle + ?Sized> PercentileOracle for &T {
    fn summarize(&self, percentiles: &[f64]) -> Result<Summary, BinError> {
        (**self).summarize(percentiles)
    }
}
