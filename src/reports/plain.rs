//! Plain line-prefixed output.

use super::{PathsHeader, ReportOptions, Reporter};
use crate::diff::{DiffLine, DiffLineType, DiffSink, DiffStats};
use crate::error::Result;
use crossterm::queue;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use std::io::Write;

/// Writes `<prefix><line>\n` per event, copying line bytes verbatim.
pub struct PlainReporter<W: Write> {
    writer: W,
    options: ReportOptions,
    stats: DiffStats,
    header_written: bool,
}

impl<W: Write> PlainReporter<W> {
    pub fn new(writer: W, options: ReportOptions) -> Self {
        Self {
            writer,
            options,
            stats: DiffStats::new(),
            header_written: false,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        self.header_written = true;
        if let Some(PathsHeader { expected, actual }) = &self.options.header {
            writeln!(self.writer, "--- {expected}")?;
            writeln!(self.writer, "+++ {actual}")?;
        }
        Ok(())
    }

    fn color_for(line_type: DiffLineType) -> Option<Color> {
        match line_type {
            DiffLineType::Context => None,
            DiffLineType::ExpectedOnly => Some(Color::Red),
            DiffLineType::ActualOnly => Some(Color::Green),
        }
    }
}

impl<W: Write> DiffSink for PlainReporter<W> {
    fn emit(&mut self, line: &DiffLine<'_>) -> Result<()> {
        self.stats.record(line.line_type);
        if self.options.hide_context && line.line_type == DiffLineType::Context {
            return Ok(());
        }
        if !self.header_written {
            self.write_header()?;
        }

        let color = Self::color_for(line.line_type).filter(|_| self.options.color);
        if let Some(color) = color {
            queue!(self.writer, SetForegroundColor(color))?;
        }

        let mut prefix = [0; 4];
        self.writer
            .write_all(line.line_type.prefix().encode_utf8(&mut prefix).as_bytes())?;
        self.writer.write_all(line.line)?;

        if color.is_some() {
            queue!(self.writer, ResetColor)?;
        }
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> Reporter for PlainReporter<W> {
    fn finish(&mut self, _has_diff: bool) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn stats(&self) -> DiffStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{diff_with, Strategy};
    use insta::assert_snapshot;

    fn run(expected: &str, actual: &str, options: ReportOptions) -> (String, DiffStats) {
        let mut out = Vec::new();
        let mut reporter = PlainReporter::new(&mut out, options);
        let has_diff =
            diff_with(Strategy::Eager, expected.as_bytes(), actual.as_bytes(), &mut reporter)
                .unwrap();
        reporter.finish(has_diff).unwrap();
        let stats = reporter.stats();
        drop(reporter);
        (String::from_utf8(out).unwrap(), stats)
    }

    #[test]
    fn test_plain_output() {
        let (out, stats) = run("1\n2\n3\n4\n5\n", "1\n2\nX\n4\n5\n", ReportOptions::default());
        assert_snapshot!(out, @r"
        -3
        +X
         4
         5
        ");
        assert_eq!(stats.context, 2);
        assert_eq!(stats.changes(), 2);
    }

    #[test]
    fn test_hide_context() {
        let options = ReportOptions {
            hide_context: true,
            ..ReportOptions::default()
        };
        let (out, stats) = run("1\n2\n3\n", "0\n1\n2\n3\n", options);
        assert_eq!(out, "+0\n");
        // Hidden lines are still counted.
        assert_eq!(stats.context, 3);
    }

    #[test]
    fn test_header_written_once_before_first_line() {
        let options = ReportOptions {
            header: Some(PathsHeader {
                expected: "exp.txt".to_string(),
                actual: "act.txt".to_string(),
            }),
            ..ReportOptions::default()
        };
        let (out, _) = run("A\nB\n", "X\nY\n", options);
        assert_snapshot!(out, @r"
        --- exp.txt
        +++ act.txt
        -A
        -B
        +X
        +Y
        ");
    }

    #[test]
    fn test_header_skipped_without_diff() {
        let options = ReportOptions {
            header: Some(PathsHeader {
                expected: "exp.txt".to_string(),
                actual: "act.txt".to_string(),
            }),
            ..ReportOptions::default()
        };
        let (out, _) = run("same\n", "same\n", options);
        assert!(out.is_empty());
    }

    #[test]
    fn test_color_wraps_changed_lines_only() {
        let options = ReportOptions {
            color: true,
            ..ReportOptions::default()
        };
        let (out, _) = run("a\n", "b\na\n", options);
        assert!(out.starts_with("\u{1b}["));
        assert!(out.contains("+b"));
        assert!(out.ends_with(" a\n"));
    }

    #[test]
    fn test_bytes_written_verbatim() {
        let mut out = Vec::new();
        let mut reporter = PlainReporter::new(&mut out, ReportOptions::default());
        reporter
            .emit(&DiffLine::new(&[0xff, b'\r'], DiffLineType::ActualOnly))
            .unwrap();
        drop(reporter);
        assert_eq!(out, vec![b'+', 0xff, b'\r', b'\n']);
    }
}
