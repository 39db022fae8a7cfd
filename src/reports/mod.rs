//! Report generation for diff events.
//!
//! Reporters are [`DiffSink`]s that write each event as it arrives:
//! - Plain: `' '`, `'-'` or `'+'` followed by the line bytes
//! - JSON: newline-delimited objects, one per event, then a summary record
//! - Summary: per-type counts and a verdict, written once at the end

mod json;
mod plain;
mod summary;
mod types;

pub use json::NdjsonReporter;
pub use plain::PlainReporter;
pub use summary::SummaryReporter;
pub use types::{PathsHeader, ReportFormat, ReportOptions};

use crate::diff::{DiffSink, DiffStats};
use crate::error::Result;
use std::io::Write;

/// A sink that renders diff events to an output.
pub trait Reporter: DiffSink {
    /// Write anything that depends on the final verdict and flush.
    fn finish(&mut self, has_diff: bool) -> Result<()>;

    /// Counts of every event received so far, including hidden ones.
    fn stats(&self) -> DiffStats;
}

/// Create a reporter for `format` writing to `writer`.
pub fn create_reporter<'w, W>(
    format: ReportFormat,
    writer: W,
    options: ReportOptions,
) -> Box<dyn Reporter + 'w>
where
    W: Write + 'w,
{
    match format {
        ReportFormat::Plain => Box::new(PlainReporter::new(writer, options)),
        ReportFormat::Json => Box::new(NdjsonReporter::new(writer, options)),
        ReportFormat::Summary => Box::new(SummaryReporter::new(writer)),
    }
}
