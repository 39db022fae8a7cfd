//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One line per event, prefixed with ' ', '-' or '+'
    #[default]
    Plain,
    /// Newline-delimited JSON, one object per event plus a summary
    #[value(alias = "ndjson")]
    Json,
    /// Line counts and verdict only
    Summary,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Summary => write!(f, "summary"),
        }
    }
}

/// Paths printed ahead of the first reported line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathsHeader {
    pub expected: String,
    pub actual: String,
}

impl PathsHeader {
    pub fn new(expected: &Path, actual: &Path) -> Self {
        Self {
            expected: expected.display().to_string(),
            actual: actual.display().to_string(),
        }
    }
}

/// Presentation options shared by all report formats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Drop context lines from the output
    pub hide_context: bool,
    /// Emit ANSI colors (plain format only)
    pub color: bool,
    /// Print the compared paths before the first line
    pub header: Option<PathsHeader>,
}
