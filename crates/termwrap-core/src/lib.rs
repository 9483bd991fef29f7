//! # termwrap-core
//!
//! Foundation crate for term-wrapper resolution.
//! Defines the term/query/bin data model, the capability traits the
//! resolver depends on, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TermwrapConfig;
pub use errors::{BinError, ResolveError, ResolveResult};
pub use models::{
    Bin, Mode, Query, QueryType, RawQuery, RawTermWrapper, Shape, Term, TermKind, TermType,
    TermWrapper, TwTag,
};
pub use traits::{PercentileOracle, Vocabulary};
