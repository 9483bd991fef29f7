//! # termwrap-binning
//!
//! Pure bin generation for numeric terms.
//!
//! A compact spec (`bin_size`, `first_bin`, optional `last_bin`) plus a
//! percentile summary of the term's values yields an ordered, labeled,
//! contiguous partition:
//!
//! 1. [`parse_spec`] validates untrusted JSON into a [`BinSpec`]
//! 2. [`target_percentiles`] names the percentiles the spec needs
//! 3. [`generate`] asks the oracle once and lays out the bins
//! 4. [`get_bin_label`] renders each bin's human-readable range
//!
//! [`compute_bins`] chains all four.

pub mod bin_list;
pub mod compute;
pub mod label;
pub mod median;
pub mod percentiles;
pub mod spec;
pub mod summary;

pub use bin_list::{label_bins, validate_bin_list};
pub use compute::{compute_bins, compute_bins_with, generate};
pub use label::{get_bin_label, LabelConfig};
pub use median::median_bins;
pub use percentiles::target_percentiles;
pub use spec::{parse_spec, parse_spec_map};
pub use summary::ValueSummary;

pub use termwrap_core::models::{Bin, BinSpec, FirstBin, LastBin, Summary};
