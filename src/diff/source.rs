//! Line sources feeding the diff engine.

use super::Line;
use crate::error::Result;
use std::io::BufRead;

/// Produces lines one at a time until exhausted.
///
/// Exhaustion is permanent: once `next_line` returns `Ok(None)`, every later
/// call returns `Ok(None)` as well.
pub trait LineSource {
    /// Produce the next line, or `None` once the source is exhausted.
    fn next_line(&mut self) -> Result<Option<Line>>;
}

// ============================================================================
// Eager source
// ============================================================================

/// Lines read to completion up front; advancing moves a cursor.
#[derive(Debug, Clone, Default)]
pub struct BufferedLines {
    lines: std::vec::IntoIter<Line>,
}

impl BufferedLines {
    /// Drain `reader` completely into memory.
    pub fn read_all<R: BufRead>(reader: R) -> Result<Self> {
        let mut stream = StreamLines::new(reader);
        let mut lines = Vec::new();
        while let Some(line) = stream.next_line()? {
            lines.push(line);
        }
        Ok(Self::from_lines(lines))
    }

    /// Wrap lines that are already in memory.
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Line>,
    {
        Self {
            lines: lines
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }

    /// Number of lines not yet produced.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 0
    }
}

impl LineSource for BufferedLines {
    fn next_line(&mut self) -> Result<Option<Line>> {
        Ok(self.lines.next())
    }
}

// ============================================================================
// Lazy source
// ============================================================================

/// Lines read from an open stream, one read per call.
///
/// Lines are split on `\n`, which is stripped; a preceding `\r` is kept as
/// part of the line. A trailing fragment without a terminator is still a line.
#[derive(Debug)]
pub struct StreamLines<R> {
    reader: R,
    exhausted: bool,
}

impl<R: BufRead> StreamLines<R> {
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            exhausted: false,
        }
    }
}

impl<R: BufRead> LineSource for StreamLines<R> {
    fn next_line(&mut self) -> Result<Option<Line>> {
        if self.exhausted {
            return Ok(None);
        }

        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            self.exhausted = true;
            return Ok(None);
        }
        if line.last() == Some(&b'\n') {
            line.pop();
        }

        Ok(Some(line))
    }
}
