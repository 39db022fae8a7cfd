//! Configuration types for nanodiff operations.

use super::defaults::DEFAULT_DIFF_EXIT_CODE;
use crate::diff::Strategy;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Settings that can come from a config file, CLI flags, or both (with CLI
/// flags layered on top).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// How inputs are read while comparing
    pub diff: DiffOptions,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Exit status and input handling
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Bind this configuration to a pair of input paths.
    #[must_use]
    pub fn into_diff_config(self, expected: PathBuf, actual: PathBuf) -> DiffConfig {
        DiffConfig {
            paths: DiffPaths { expected, actual },
            diff: self.diff,
            output: self.output,
            behavior: self.behavior,
        }
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub const fn strategy(mut self, strategy: Strategy) -> Self {
        self.config.diff.strategy = strategy;
        self
    }

    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    pub const fn hide_context(mut self, hide: bool) -> Self {
        self.config.output.hide_context = hide;
        self
    }

    pub const fn show_paths(mut self, show: bool) -> Self {
        self.config.output.show_paths = show;
        self
    }

    pub const fn diff_exit_code(mut self, code: i32) -> Self {
        self.config.behavior.diff_exit_code = code;
        self
    }

    pub const fn missing_as_empty(mut self, enabled: bool) -> Self {
        self.config.behavior.missing_as_empty = enabled;
        self
    }

    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command-line overrides
// ============================================================================

/// Settings given explicitly on the command line. `None` means the flag was
/// not given and the file (or default) value stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub strategy: Option<Strategy>,
    pub output_format: Option<ReportFormat>,
    pub output_file: Option<PathBuf>,
    pub no_color: Option<bool>,
    pub hide_context: Option<bool>,
    pub show_paths: Option<bool>,
    pub diff_exit_code: Option<i32>,
    pub missing_as_empty: Option<bool>,
    pub quiet: Option<bool>,
}

// ============================================================================
// Sections
// ============================================================================

/// Comparison settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DiffOptions {
    /// Read strategy: `eager` or `lazy`
    pub strategy: Strategy,
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: ReportFormat,
    /// Write the report here instead of stdout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Omit context lines from the report
    pub hide_context: bool,
    /// Print the compared paths before the first reported line
    pub show_paths: bool,
}

/// Exit status and input handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit status used when the inputs differ
    pub diff_exit_code: i32,
    /// Treat a nonexistent input path as an empty file
    pub missing_as_empty: bool,
    /// Print nothing; report only through the exit status
    pub quiet: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            diff_exit_code: DEFAULT_DIFF_EXIT_CODE,
            missing_as_empty: false,
            quiet: false,
        }
    }
}

// ============================================================================
// Per-run configuration
// ============================================================================

/// The two inputs of a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffPaths {
    pub expected: PathBuf,
    pub actual: PathBuf,
}

/// Everything needed to run one comparison from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffConfig {
    pub paths: DiffPaths,
    pub diff: DiffOptions,
    pub output: OutputConfig,
    pub behavior: BehaviorConfig,
}
