//! Capabilities the resolution core depends on but does not implement.

pub mod percentile_oracle;
pub mod vocabulary;

pub use percentile_oracle::PercentileOracle;
pub use vocabulary::{NoVocabulary, Vocabulary};
