//! TwErrorCode trait for structured error reporting.

/// Trait for mapping termwrap errors to stable error code strings.
/// Every error enum implements this so callers across a serialization
/// boundary can match on the code instead of the message text.
pub trait TwErrorCode {
    /// Returns the error code string (e.g., "SCHEMA_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCHEMA_ERROR: &str = "SCHEMA_ERROR";
pub const INVARIANT_VIOLATION: &str = "INVARIANT_VIOLATION";
pub const ROUTING_MISS: &str = "ROUTING_MISS";
pub const REMOTE_FETCH_ERROR: &str = "REMOTE_FETCH_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
