//! **Minimal line diff for grading program output.**
//!
//! `nanodiff` compares an "expected" and an "actual" line stream and reports,
//! in input order, which lines are shared (context), present only in the
//! expected stream, or present only in the actual stream. It gives immediate
//! pass/fail feedback rather than an editable patch.
//!
//! ## Core Concepts & Modules
//!
//! - **[`diff`]**: The greedy matching engine, the [`LineSource`] abstraction
//!   over inputs, and the [`DiffSink`] abstraction over outputs. Two
//!   strategies, [`eager_diff`] and [`lazy_diff`], produce identical results.
//! - **[`reports`]**: Presentation of diff events as plain prefixed lines,
//!   newline-delimited JSON, or a summary.
//! - **[`pipeline`]**: Input path validation and output routing used by the
//!   command-line tool.
//! - **[`config`]**: Configuration types, YAML config file discovery and
//!   validation.
//!
//! ## Getting Started
//!
//! ```
//! use nanodiff::{eager_diff, DiffLineType};
//!
//! let expected = "A\nB\n".as_bytes();
//! let actual = "X\nY\n".as_bytes();
//!
//! let mut rendered = Vec::new();
//! let has_diff = eager_diff(expected, actual, |line| {
//!     rendered.push(format!("{}{}", line.line_type.prefix(), line.text()));
//! })?;
//!
//! assert!(has_diff);
//! assert_eq!(rendered, ["-A", "-B", "+X", "+Y"]);
//! # Ok::<(), nanodiff::NanodiffError>(())
//! ```
//!
//! Lines common to both inputs before the first difference are never
//! reported, so identical inputs produce no events at all.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{
    AppConfig, AppConfigBuilder, ConfigError, ConfigOverrides, DiffConfig, Validatable,
};
pub use diff::{
    diff_with, eager_diff, lazy_diff, CollectingSink, DiffEngine, DiffLine, DiffLineType,
    DiffSink, DiffStats, LineSource, Strategy,
};
pub use error::{ErrorContext, NanodiffError, OptionContext, Result};
pub use reports::{create_reporter, ReportFormat, ReportOptions, Reporter};
