//! Configuration module for nanodiff.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.nanodiff.yaml` file in your project root or `~/.config/nanodiff/`:
//!
//! ```yaml
//! diff:
//!   strategy: eager
//! output:
//!   hide_context: true
//! behavior:
//!   diff_exit_code: 3
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{DEFAULT_DIFF_EXIT_CODE, DEFAULT_READ_BUFFER_BYTES, DIFF_EXIT_CODE_RANGE};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, ConfigOverrides, DiffConfig, DiffOptions,
    DiffPaths, OutputConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.nanodiff.yaml` files.
pub fn generate_json_schema() -> crate::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}
