//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{LOG_ENV_VAR, LOG_FORMAT_ENV_VAR};

static INIT: Once = Once::new();

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON; anything else is text.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }

    /// Format named by `TERMWRAP_LOG_FORMAT`, text when unset.
    pub fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV_VAR)
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }
}

/// Initialize the termwrap tracing/logging system.
///
/// Reads `TERMWRAP_LOG` for per-module log levels.
/// Format: `TERMWRAP_LOG=termwrap_resolve=debug,termwrap_binning=info`
///
/// Falls back to `termwrap=info` if `TERMWRAP_LOG` is not set or is invalid.
/// `TERMWRAP_LOG_FORMAT=json` switches to structured JSON output.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_with_format(LogFormat::from_env());
}

/// Like [`init_tracing`], with an explicit output format.
pub fn init_tracing_with_format(format: LogFormat) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("termwrap=info"));

        let (text, json) = match format {
            LogFormat::Text => (
                Some(
                    fmt::layer()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                ),
                None,
            ),
            LogFormat::Json => (
                None,
                Some(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                ),
            ),
        };

        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(text)
            .with(json)
            .with(filter)
            .try_init();
    });
}
