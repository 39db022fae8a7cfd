//! Counts-only output.

use super::Reporter;
use crate::diff::{DiffLine, DiffSink, DiffStats};
use crate::error::Result;
use std::io::Write;

/// Counts events and prints a one-line verdict when finished.
pub struct SummaryReporter<W: Write> {
    writer: W,
    stats: DiffStats,
}

impl<W: Write> SummaryReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            stats: DiffStats::new(),
        }
    }
}

impl<W: Write> DiffSink for SummaryReporter<W> {
    fn emit(&mut self, line: &DiffLine<'_>) -> Result<()> {
        self.stats.record(line.line_type);
        Ok(())
    }
}

impl<W: Write> Reporter for SummaryReporter<W> {
    fn finish(&mut self, has_diff: bool) -> Result<()> {
        if has_diff {
            writeln!(
                self.writer,
                "Outputs differ: {} expected-only, {} actual-only, {} context",
                self.stats.expected_only, self.stats.actual_only, self.stats.context
            )?;
        } else {
            writeln!(self.writer, "Outputs match")?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn stats(&self) -> DiffStats {
        self.stats
    }
}
