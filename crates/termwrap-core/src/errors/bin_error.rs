//! Binning errors.

use super::error_code::{self, TwErrorCode};

/// Errors raised while validating a bin spec or generating bins.
///
/// Every variant is a schema-level rejection: the spec is malformed or
/// the summary it was evaluated against cannot anchor it. None of them
/// are ever defaulted away.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BinError {
    #[error("{reason}")]
    Schema { reason: String },

    #[error("missing summary value for p{percentile}")]
    MissingPercentile { percentile: String },

    #[error("exceeded the maximum of {max_bins} bins")]
    TooManyBins { max_bins: usize },

    #[error("invalid bin list: {reason}")]
    InvalidBinList { reason: String },
}

impl BinError {
    pub fn schema(reason: impl Into<String>) -> Self {
        Self::Schema {
            reason: reason.into(),
        }
    }
}

impl TwErrorCode for BinError {
    fn error_code(&self) -> &'static str {
        error_code::SCHEMA_ERROR
    }
}
