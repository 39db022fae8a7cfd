//! Diff command handler.
//!
//! Compares the expected and actual files named by a [`DiffConfig`].

use crate::config::{DiffConfig, Validatable};
use crate::diff::diff_with;
use crate::pipeline::{exit_codes, open_input, should_use_color, OutputTarget};
use crate::reports::{create_reporter, PathsHeader, ReportFormat, ReportOptions};
use anyhow::{bail, Context, Result};

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration: {}", messages.join("; "));
    }

    let missing_as_empty = config.behavior.missing_as_empty;
    let expected = open_input(&config.paths.expected, missing_as_empty)
        .context("Failed to open expected output")?;
    let actual = open_input(&config.paths.actual, missing_as_empty)
        .context("Failed to open actual output")?;

    tracing::debug!(
        expected = %expected.path.display(),
        actual = %actual.path.display(),
        strategy = %config.diff.strategy,
        "Comparing files"
    );
    for input in [&expected, &actual].into_iter().filter(|i| i.missing) {
        tracing::info!("{} does not exist, compared as empty", input.path.display());
    }

    let target = if config.behavior.quiet {
        None
    } else {
        Some(OutputTarget::from_option(config.output.file.clone()))
    };
    let options = ReportOptions {
        hide_context: config.output.hide_context,
        color: config.output.format == ReportFormat::Plain
            && target
                .as_ref()
                .is_some_and(|t| should_use_color(config.output.no_color, t)),
        header: config
            .output
            .show_paths
            .then(|| PathsHeader::new(&expected.path, &actual.path)),
    };

    let writer: Box<dyn std::io::Write> = match &target {
        Some(target) => target.open().context("Failed to open output")?,
        None => Box::new(std::io::sink()),
    };
    let mut reporter = create_reporter(config.output.format, writer, options);

    let has_diff = diff_with(
        config.diff.strategy,
        expected.reader,
        actual.reader,
        reporter.as_mut(),
    )
    .context("Comparison failed")?;
    reporter.finish(has_diff).context("Failed to write report")?;

    let stats = reporter.stats();
    tracing::debug!(
        context = stats.context,
        expected_only = stats.expected_only,
        actual_only = stats.actual_only,
        has_diff,
        "Comparison complete"
    );

    if let Some(OutputTarget::File(path)) = &target {
        tracing::info!("Report written to {}", path.display());
    }

    Ok(determine_exit_code(&config, has_diff))
}

/// Determine the exit code from the verdict and config.
const fn determine_exit_code(config: &DiffConfig, has_diff: bool) -> i32 {
    if has_diff {
        config.behavior.diff_exit_code
    } else {
        exit_codes::SUCCESS
    }
}
