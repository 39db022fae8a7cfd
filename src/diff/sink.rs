//! Consumers of diff events.

use super::{DiffLine, DiffLineType, Line};
use crate::error::Result;
use serde::Serialize;

/// Receives diff events in emission order.
///
/// Closures taking `&DiffLine<'_>` are sinks that never fail. Sinks writing to
/// an output return the write error, which aborts the comparison.
pub trait DiffSink {
    fn emit(&mut self, line: &DiffLine<'_>) -> Result<()>;
}

impl<F> DiffSink for F
where
    F: FnMut(&DiffLine<'_>),
{
    fn emit(&mut self, line: &DiffLine<'_>) -> Result<()> {
        self(line);
        Ok(())
    }
}

/// An owned copy of a diff event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedDiffLine {
    pub line: Line,
    pub line_type: DiffLineType,
}

impl OwnedDiffLine {
    /// Render as `<prefix><text>`, the way the plain report prints it.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "{}{}",
            self.line_type.prefix(),
            String::from_utf8_lossy(&self.line)
        )
    }
}

/// Collects every event it receives.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    lines: Vec<OwnedDiffLine>,
}

impl CollectingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lines(&self) -> &[OwnedDiffLine] {
        &self.lines
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<OwnedDiffLine> {
        self.lines
    }

    /// Every collected event rendered with its prefix.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        self.lines.iter().map(OwnedDiffLine::render).collect()
    }
}

impl DiffSink for CollectingSink {
    fn emit(&mut self, line: &DiffLine<'_>) -> Result<()> {
        self.lines.push(line.to_owned_line());
        Ok(())
    }
}

/// Per-type event counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub context: usize,
    pub expected_only: usize,
    pub actual_only: usize,
}

impl DiffStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, line_type: DiffLineType) {
        match line_type {
            DiffLineType::Context => self.context += 1,
            DiffLineType::ExpectedOnly => self.expected_only += 1,
            DiffLineType::ActualOnly => self.actual_only += 1,
        }
    }

    /// Number of expected-only and actual-only lines.
    #[must_use]
    pub const fn changes(&self) -> usize {
        self.expected_only + self.actual_only
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.context + self.changes()
    }

    #[must_use]
    pub const fn has_diff(&self) -> bool {
        self.changes() > 0
    }
}

impl DiffSink for DiffStats {
    fn emit(&mut self, line: &DiffLine<'_>) -> Result<()> {
        self.record(line.line_type);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink_keeps_order() {
        let mut sink = CollectingSink::new();
        sink.emit(&DiffLine::new(b"a", DiffLineType::ExpectedOnly)).unwrap();
        sink.emit(&DiffLine::new(b"b", DiffLineType::ActualOnly)).unwrap();
        sink.emit(&DiffLine::new(b"c", DiffLineType::Context)).unwrap();

        assert_eq!(sink.render(), vec!["-a", "+b", " c"]);
        assert_eq!(sink.lines().len(), 3);
        assert_eq!(sink.into_lines()[2].line, b"c".to_vec());
    }

    #[test]
    fn test_stats_counts() {
        let mut stats = DiffStats::new();
        assert!(!stats.has_diff());

        stats.record(DiffLineType::Context);
        assert!(!stats.has_diff());

        stats.emit(&DiffLine::new(b"x", DiffLineType::ActualOnly)).unwrap();
        stats.record(DiffLineType::ExpectedOnly);
        assert_eq!(stats.changes(), 2);
        assert_eq!(stats.total(), 3);
        assert!(stats.has_diff());
    }

    #[test]
    fn test_closure_sink() {
        let mut count = 0;
        let mut sink = |_: &DiffLine<'_>| count += 1;
        sink.emit(&DiffLine::new(b"", DiffLineType::Context)).unwrap();
        sink.emit(&DiffLine::new(b"", DiffLineType::Context)).unwrap();
        assert_eq!(count, 2);
    }
}
