//! Configuration file loading for car-diagnostics
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./diagnostics.toml` or `./.diagnostics.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/car-diagnostics/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileInputConfig, FileOutputConfig, FileOutputFormat,
    FileProgressConfig, FileProgressStyle,
};
pub use loader::ConfigLoader;
