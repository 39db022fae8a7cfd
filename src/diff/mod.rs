//! Greedy line-matching diff engine.
//!
//! Compares an "expected" and an "actual" line stream and reports, in input
//! order, which lines are shared (context), present only in the expected
//! stream, or present only in the actual stream.
//!
//! Two strategies drive the same [`DiffEngine`]:
//!
//! - [`Strategy::Eager`] reads both inputs to completion before matching.
//! - [`Strategy::Lazy`] reads the actual input only as far ahead as each
//!   search needs, so memory is bounded by the longest mismatch run.
//!
//! Both produce the same event sequence for the same inputs.
//!
//! # Example
//!
//! ```
//! use nanodiff::diff::{lazy_diff, DiffLineType};
//!
//! let expected = "1\n2\n3\n".as_bytes();
//! let actual = "0\n1\n2\n3\n".as_bytes();
//!
//! let mut events = Vec::new();
//! let has_diff = lazy_diff(expected, actual, |line| {
//!     events.push((line.text().into_owned(), line.line_type));
//! })?;
//!
//! assert!(has_diff);
//! assert_eq!(events[0], ("0".to_string(), DiffLineType::ActualOnly));
//! # Ok::<(), nanodiff::NanodiffError>(())
//! ```

mod engine;
mod sink;
mod source;

pub use engine::DiffEngine;
pub use sink::{CollectingSink, DiffSink, DiffStats, OwnedDiffLine};
pub use source::{BufferedLines, LineSource, StreamLines};

use crate::error::Result;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::io::BufRead;

/// A single line without its terminator. Compared byte-for-byte.
pub type Line = Vec<u8>;

/// Classification of an emitted diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffLineType {
    /// Present in both inputs, shown once divergence has begun
    Context,
    /// Present in the expected input with no match in the actual input
    ExpectedOnly,
    /// Present in the actual input but skipped over or trailing
    ActualOnly,
}

impl DiffLineType {
    /// Prefix character used by the plain presentation.
    #[must_use]
    pub const fn prefix(self) -> char {
        match self {
            Self::Context => ' ',
            Self::ExpectedOnly => '-',
            Self::ActualOnly => '+',
        }
    }

    /// Whether this line type marks a difference.
    #[must_use]
    pub const fn is_change(self) -> bool {
        !matches!(self, Self::Context)
    }
}

impl std::fmt::Display for DiffLineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Context => write!(f, "context"),
            Self::ExpectedOnly => write!(f, "expected_only"),
            Self::ActualOnly => write!(f, "actual_only"),
        }
    }
}

/// A diff event borrowed from the engine for the duration of one callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffLine<'a> {
    pub line: &'a [u8],
    pub line_type: DiffLineType,
}

impl<'a> DiffLine<'a> {
    #[must_use]
    pub const fn new(line: &'a [u8], line_type: DiffLineType) -> Self {
        Self { line, line_type }
    }

    /// The line as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn text(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.line)
    }

    /// Copy this event out of the engine's buffers.
    #[must_use]
    pub fn to_owned_line(&self) -> OwnedDiffLine {
        OwnedDiffLine {
            line: self.line.to_vec(),
            line_type: self.line_type,
        }
    }
}

/// How the inputs are read while matching.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Read both inputs completely before comparing
    Eager,
    /// Read the actual input only as far as each match search needs
    #[default]
    Lazy,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eager => write!(f, "eager"),
            Self::Lazy => write!(f, "lazy"),
        }
    }
}

/// Compare two streams after reading both of them into memory.
///
/// `on_event` is called once per emitted line, in order. Returns `true` if any
/// expected-only or actual-only line was emitted.
pub fn eager_diff<E, A, F>(expected: E, actual: A, mut on_event: F) -> Result<bool>
where
    E: BufRead,
    A: BufRead,
    F: FnMut(&DiffLine<'_>),
{
    diff_with(Strategy::Eager, expected, actual, &mut on_event)
}

/// Compare two streams, reading the actual stream only as far ahead as needed.
///
/// Observable behavior is identical to [`eager_diff`].
pub fn lazy_diff<E, A, F>(expected: E, actual: A, mut on_event: F) -> Result<bool>
where
    E: BufRead,
    A: BufRead,
    F: FnMut(&DiffLine<'_>),
{
    diff_with(Strategy::Lazy, expected, actual, &mut on_event)
}

/// Compare two streams with the given strategy, sending events to `sink`.
pub fn diff_with<E, A, S>(strategy: Strategy, expected: E, actual: A, sink: &mut S) -> Result<bool>
where
    E: BufRead,
    A: BufRead,
    S: DiffSink + ?Sized,
{
    tracing::debug!(%strategy, "starting comparison");
    match strategy {
        Strategy::Eager => {
            let expected = BufferedLines::read_all(expected)?;
            let actual = BufferedLines::read_all(actual)?;
            tracing::debug!(
                expected_lines = expected.len(),
                actual_lines = actual.len(),
                "inputs materialized"
            );
            DiffEngine::new(expected, actual).run(sink)
        }
        Strategy::Lazy => {
            DiffEngine::new(StreamLines::new(expected), StreamLines::new(actual)).run(sink)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(strategy: Strategy, expected: &str, actual: &str) -> (bool, Vec<String>) {
        let mut sink = CollectingSink::new();
        let has_diff = diff_with(strategy, expected.as_bytes(), actual.as_bytes(), &mut sink)
            .expect("in-memory diff cannot fail");
        (has_diff, sink.render())
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(DiffLineType::Context.prefix(), ' ');
        assert_eq!(DiffLineType::ExpectedOnly.prefix(), '-');
        assert_eq!(DiffLineType::ActualOnly.prefix(), '+');
        assert!(!DiffLineType::Context.is_change());
        assert!(DiffLineType::ActualOnly.is_change());
    }

    #[test]
    fn test_strategies_agree_on_mismatch_in_middle() {
        let expected = "1\n2\n3\n4\n5\n";
        let actual = "1\n2\nX\n4\n5\n";
        let eager = collect(Strategy::Eager, expected, actual);
        let lazy = collect(Strategy::Lazy, expected, actual);

        assert_eq!(eager, lazy);
        assert_eq!(lazy.1, vec!["-3", "+X", " 4", " 5"]);
        assert!(lazy.0);
    }

    #[test]
    fn test_closure_entry_points() {
        let mut seen = Vec::new();
        let has_diff = eager_diff("a\n".as_bytes(), "b\n".as_bytes(), |line| {
            seen.push(line.to_owned_line());
        })
        .unwrap();
        assert!(has_diff);
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].line_type, DiffLineType::ExpectedOnly);
        assert_eq!(seen[1].line, b"b");
    }

    #[test]
    fn test_text_is_lossy() {
        let bytes = [b'o', 0xff, b'k'];
        let line = DiffLine::new(&bytes, DiffLineType::Context);
        assert_eq!(line.text(), "o\u{fffd}k");
    }

    #[test]
    fn test_strategy_serde_names() {
        assert_eq!(serde_json::to_string(&Strategy::Eager).unwrap(), "\"eager\"");
        assert_eq!(Strategy::default(), Strategy::Lazy);
        assert_eq!(Strategy::Lazy.to_string(), "lazy");
    }
}
