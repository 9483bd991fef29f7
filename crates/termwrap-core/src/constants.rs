//! Shared constants for term-wrapper resolution.

/// Name of the project-level config file.
pub const CONFIG_FILENAME: &str = "termwrap.toml";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "TERMWRAP_LOG";

/// Environment variable selecting the log output format (`json` or text).
pub const LOG_FORMAT_ENV_VAR: &str = "TERMWRAP_LOG_FORMAT";

/// Key of the bin preset used when a query names none.
pub const DEFAULT_BIN_PRESET: &str = "default";

/// Key of the coarser bin preset some vocabularies provide.
pub const LESS_BIN_PRESET: &str = "less";

/// Value of `q.preferredBins` that requests a median split.
pub const MEDIAN_BIN_PRESET: &str = "median";

/// Value key marking a wildtype sample for gene-variant terms.
pub const WILDTYPE_CLASS: &str = "WT";

/// Number of groups a binary-mode query must resolve to.
pub const BINARY_GROUP_COUNT: usize = 2;
