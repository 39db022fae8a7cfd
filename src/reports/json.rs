//! Newline-delimited JSON output.
//!
//! Each event becomes one object:
//!
//! ```text
//! {"type":"expected_only","line":"3"}
//! {"type":"actual_only","line":"X"}
//! {"type":"context","line":"4"}
//! {"type":"summary","has_diff":true,"context":1,"expected_only":1,"actual_only":1}
//! ```
//!
//! Lines that are not valid UTF-8 are converted lossily.

use super::{ReportOptions, Reporter};
use crate::diff::{DiffLine, DiffLineType, DiffSink, DiffStats};
use crate::error::{ErrorContext, Result};
use serde::Serialize;
use std::borrow::Cow;
use std::io::Write;

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Record<'a> {
    Context {
        line: Cow<'a, str>,
    },
    ExpectedOnly {
        line: Cow<'a, str>,
    },
    ActualOnly {
        line: Cow<'a, str>,
    },
    Summary {
        has_diff: bool,
        #[serde(flatten)]
        stats: DiffStats,
    },
}

impl<'a> From<&DiffLine<'a>> for Record<'a> {
    fn from(event: &DiffLine<'a>) -> Self {
        let line = event.text();
        match event.line_type {
            DiffLineType::Context => Self::Context { line },
            DiffLineType::ExpectedOnly => Self::ExpectedOnly { line },
            DiffLineType::ActualOnly => Self::ActualOnly { line },
        }
    }
}

/// Writes one JSON object per event, followed by a summary record.
pub struct NdjsonReporter<W: Write> {
    writer: W,
    options: ReportOptions,
    stats: DiffStats,
}

impl<W: Write> NdjsonReporter<W> {
    pub fn new(writer: W, options: ReportOptions) -> Self {
        Self {
            writer,
            options,
            stats: DiffStats::new(),
        }
    }

    fn write_record(&mut self, record: &Record<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record).context("writing JSON record")?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> DiffSink for NdjsonReporter<W> {
    fn emit(&mut self, line: &DiffLine<'_>) -> Result<()> {
        self.stats.record(line.line_type);
        if self.options.hide_context && line.line_type == DiffLineType::Context {
            return Ok(());
        }
        self.write_record(&Record::from(line))
    }
}

impl<W: Write> Reporter for NdjsonReporter<W> {
    fn finish(&mut self, has_diff: bool) -> Result<()> {
        let summary = Record::Summary {
            has_diff,
            stats: self.stats,
        };
        self.write_record(&summary)?;
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
    use serde_json::{json, Value};

    fn run(expected: &str, actual: &str, options: ReportOptions) -> Vec<Value> {
        let mut out = Vec::new();
        let mut reporter = NdjsonReporter::new(&mut out, options);
        let has_diff =
            diff_with(Strategy::Lazy, expected.as_bytes(), actual.as_bytes(), &mut reporter)
                .unwrap();
        reporter.finish(has_diff).unwrap();
        drop(reporter);

        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_records() {
        let records = run("1\n2\n3\n", "2\n3\n", ReportOptions::default());
        assert_eq!(
            records,
            vec![
                json!({"type": "expected_only", "line": "1"}),
                json!({"type": "context", "line": "2"}),
                json!({"type": "context", "line": "3"}),
                json!({
                    "type": "summary",
                    "has_diff": true,
                    "context": 2,
                    "expected_only": 1,
                    "actual_only": 0
                }),
            ]
        );
    }

    #[test]
    fn test_matching_inputs_write_only_summary() {
        let records = run("a\n", "a\n", ReportOptions::default());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["type"], "summary");
        assert_eq!(records[0]["has_diff"], false);
    }

    #[test]
    fn test_hide_context() {
        let options = ReportOptions {
            hide_context: true,
            ..ReportOptions::default()
        };
        let records = run("1\n2\n3\n", "2\n3\n", options);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["context"], 2);
    }

    #[test]
    fn test_escapes_special_characters() {
        let records = run("say \"hi\"\ttab\n", "", ReportOptions::default());
        assert_eq!(records[0]["line"], "say \"hi\"\ttab");
    }
}
