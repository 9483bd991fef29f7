//! Error handling for term-wrapper resolution.
//! One error enum per subsystem, `thiserror` only.

pub mod bin_error;
pub mod config_error;
pub mod error_code;
pub mod resolve_error;

pub use bin_error::BinError;
pub use config_error::ConfigError;
pub use error_code::TwErrorCode;
pub use resolve_error::{ResolveError, ResolveResult};
