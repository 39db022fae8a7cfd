//! Greedy alignment of expected lines against a window of pending actual lines.

use super::{DiffLine, DiffLineType, DiffSink, Line, LineSource};
use crate::error::Result;
use std::collections::VecDeque;

/// Drives one comparison between an expected and an actual line source.
///
/// For every expected line the engine looks for the earliest equal line among
/// the actual lines it has read ahead, reading further actual lines only while
/// no match has been found. Actual lines skipped over to reach a match are
/// reported as actual-only; an expected line with no match anywhere in the
/// remaining actual input is reported as expected-only and leaves the
/// read-ahead window untouched.
///
/// Context lines are reported only once a difference has been seen, so a
/// common prefix of both inputs produces no output at all.
#[derive(Debug)]
pub struct DiffEngine<E, A> {
    expected: E,
    actual: A,
    /// Actual lines read ahead but not yet classified or emitted.
    actual_buffer: VecDeque<Line>,
    has_diff: bool,
    peak_buffered: usize,
}

impl<E: LineSource, A: LineSource> DiffEngine<E, A> {
    pub fn new(expected: E, actual: A) -> Self {
        Self {
            expected,
            actual,
            actual_buffer: VecDeque::new(),
            has_diff: false,
            peak_buffered: 0,
        }
    }

    /// Run the comparison to completion, returning whether any difference was
    /// emitted.
    pub fn run<S: DiffSink + ?Sized>(&mut self, sink: &mut S) -> Result<bool> {
        while let Some(expected_line) = self.expected.next_line()? {
            match self.find_match(&expected_line)? {
                Some(index) => self.accept_match(index, &expected_line, sink)?,
                None => {
                    self.has_diff = true;
                    sink.emit(&DiffLine::new(&expected_line, DiffLineType::ExpectedOnly))?;
                }
            }
        }

        self.flush_actual(sink)?;

        tracing::debug!(
            has_diff = self.has_diff,
            peak_buffered = self.peak_buffered,
            "comparison finished"
        );
        Ok(self.has_diff)
    }

    /// Largest number of actual lines held in the read-ahead window so far.
    #[must_use]
    pub const fn peak_buffered(&self) -> usize {
        self.peak_buffered
    }

    /// Index of the earliest pending actual line equal to `line`, reading more
    /// actual lines as needed. `None` means the actual source is exhausted.
    fn find_match(&mut self, line: &[u8]) -> Result<Option<usize>> {
        if let Some(index) = self
            .actual_buffer
            .iter()
            .position(|candidate| candidate.as_slice() == line)
        {
            return Ok(Some(index));
        }

        while let Some(candidate) = self.actual.next_line()? {
            let matched = candidate.as_slice() == line;
            self.actual_buffer.push_back(candidate);
            self.peak_buffered = self.peak_buffered.max(self.actual_buffer.len());
            if matched {
                return Ok(Some(self.actual_buffer.len() - 1));
            }
        }

        tracing::trace!(
            buffered = self.actual_buffer.len(),
            "no match before end of actual input"
        );
        Ok(None)
    }

    /// Emit the lines skipped to reach `index`, then the matched line itself
    /// as context, and drop all of them from the window.
    fn accept_match<S: DiffSink + ?Sized>(
        &mut self,
        index: usize,
        expected_line: &[u8],
        sink: &mut S,
    ) -> Result<()> {
        if index > 0 {
            tracing::trace!(skipped = index, "matched after skipping actual lines");
        }

        for skipped in self.actual_buffer.drain(..index) {
            self.has_diff = true;
            sink.emit(&DiffLine::new(&skipped, DiffLineType::ActualOnly))?;
        }

        if self.has_diff {
            sink.emit(&DiffLine::new(expected_line, DiffLineType::Context))?;
        }

        self.actual_buffer.pop_front();
        Ok(())
    }

    /// Report every actual line that was never matched.
    fn flush_actual<S: DiffSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        for pending in self.actual_buffer.drain(..) {
            self.has_diff = true;
            sink.emit(&DiffLine::new(&pending, DiffLineType::ActualOnly))?;
        }

        while let Some(trailing) = self.actual.next_line()? {
            self.has_diff = true;
            sink.emit(&DiffLine::new(&trailing, DiffLineType::ActualOnly))?;
        }

        Ok(())
    }
}
