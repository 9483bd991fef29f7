//! Configuration for termwrap.
//! TOML-based, 3-layer resolution: overrides > env > project > defaults.

pub mod binning_config;
pub mod defaults;
pub mod resolve_config;
pub mod termwrap_config;

pub use binning_config::BinningConfig;
pub use resolve_config::ResolveConfig;
pub use termwrap_config::{ConfigOverrides, TermwrapConfig};
