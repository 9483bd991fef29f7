//! Resolution errors.

use super::error_code::{self, TwErrorCode};
use super::BinError;

/// Errors raised while resolving a raw term wrapper.
///
/// Nothing here is recoverable inside the framework: a caller gets either
/// a fully validated wrapper or one of these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    /// Malformed or incomplete input.
    #[error("{reason}")]
    Schema { reason: String },

    /// A bin spec failed validation inside a numeric query.
    #[error("{0}")]
    Bin(#[from] BinError),

    /// Well-formed input whose parts contradict each other.
    #[error("{reason}")]
    Invariant { reason: String },

    /// No kind or shape resolver claimed the input.
    #[error("cannot process tw: {reason}")]
    RoutingMiss { reason: String },

    /// A vocabulary capability call failed.
    #[error("remote fetch failed ({capability}): {reason}")]
    RemoteFetch { capability: String, reason: String },
}

pub type ResolveResult<T> = Result<T, ResolveError>;

impl ResolveError {
    pub fn schema(reason: impl Into<String>) -> Self {
        Self::Schema {
            reason: reason.into(),
        }
    }

    pub fn invariant(reason: impl Into<String>) -> Self {
        Self::Invariant {
            reason: reason.into(),
        }
    }

    pub fn routing_miss(reason: impl Into<String>) -> Self {
        Self::RoutingMiss {
            reason: reason.into(),
        }
    }

    pub fn remote_fetch(capability: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::RemoteFetch {
            capability: capability.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ResolveError {
    fn from(err: serde_json::Error) -> Self {
        Self::schema(format!("malformed term wrapper: {err}"))
    }
}

impl TwErrorCode for ResolveError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Schema { .. } => error_code::SCHEMA_ERROR,
            Self::Bin(e) => e.error_code(),
            Self::Invariant { .. } => error_code::INVARIANT_VIOLATION,
            Self::RoutingMiss { .. } => error_code::ROUTING_MISS,
            Self::RemoteFetch { .. } => error_code::REMOTE_FETCH_ERROR,
        }
    }
}
