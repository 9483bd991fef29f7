//! # termwrap-resolve
//!
//! Turns a loosely specified (term, query) pair into exactly one validated,
//! tagged [`TermWrapper`](termwrap_core::TermWrapper).
//!
//! Resolution runs in fixed stages:
//! 1. [`Router::preprocess`] normalizes legacy `q.groupsetting` input
//! 2. the kind resolver selected by `term.type` fills term and query defaults
//! 3. [`shapes::classify`] picks the query shape, then the shape validates it
//! 4. [`TwBase::finish`] derives the tag, once
//!
//! The only suspension points are the [`Vocabulary`](termwrap_core::Vocabulary)
//! calls numeric kinds make for default bins and percentiles.

pub mod addons;
pub mod base;
pub mod kinds;
pub mod legacy;
pub mod router;
pub mod shapes;

pub use addons::{Addon, AddonRegistry, Addons, Resolved};
pub use base::TwBase;
pub use router::Router;
