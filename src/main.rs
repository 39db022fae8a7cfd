//! nanodiff: minimal line diff for grading program output
//!
//! Compares an expected and an actual file and prints only what differs.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use nanodiff::{
    cli::{self, ConfigAction},
    config::{AppConfig, ConfigOverrides},
    diff::Strategy,
    pipeline::exit_codes,
    reports::ReportFormat,
    OptionContext,
};
use std::io::{self, Write as _};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "nanodiff")]
#[command(version)]
#[command(about = "Minimal line diff for grading program output", long_about = None)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
#[command(after_help = "OUTPUT:
    ' ' line present in both files (shown only after the first difference)
    '-' line only in the expected file
    '+' line only in the actual file

EXIT CODES:
    0  Files match
    1  Files differ (see --exit-code)
    2  Error occurred

EXAMPLES:
    nanodiff expected.txt actual.txt
    nanodiff --hide-context --exit-code 3 -- expected.txt actual.txt
    nanodiff -o json expected.txt actual.txt > diff.ndjson")]
struct Cli {
    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    diff: DiffArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Arguments for comparing two files
#[derive(Args)]
struct DiffArgs {
    /// Path to the expected output
    #[arg(required = true)]
    expected: Option<PathBuf>,

    /// Path to the actual output
    #[arg(required = true)]
    actual: Option<PathBuf>,

    /// How inputs are read (eager reads both files first)
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// Output format
    #[arg(short, long, value_enum)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Omit context lines
    #[arg(long)]
    hide_context: bool,

    /// Print the compared paths before the first line
    #[arg(long)]
    show_paths: bool,

    /// Exit status when the files differ
    #[arg(long, value_name = "CODE")]
    exit_code: Option<i32>,

    /// Treat a missing file as empty
    #[arg(long)]
    missing_as_empty: bool,

    /// Print nothing; report only through the exit status
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .nanodiff.yaml in the current directory
    Init,
    /// Print the JSON schema of the config file
    Schema,
}

impl From<ConfigCommand> for ConfigAction {
    fn from(command: ConfigCommand) -> Self {
        match command {
            ConfigCommand::Show => Self::Show,
            ConfigCommand::Path => Self::Path,
            ConfigCommand::Init => Self::Init,
            ConfigCommand::Schema => Self::Schema,
        }
    }
}

impl DiffArgs {
    /// Settings given on the command line, to be layered over the file config.
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            strategy: self.strategy,
            output_format: self.output,
            output_file: self.output_file.clone(),
            no_color: self.no_color.then_some(true),
            hide_context: self.hide_context.then_some(true),
            show_paths: self.show_paths.then_some(true),
            diff_exit_code: self.exit_code,
            missing_as_empty: self.missing_as_empty.then_some(true),
            quiet: self.quiet.then_some(true),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Some(Commands::Config { action }) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            cli::run_config(action.into(), cli.config.as_deref(), &mut out)?;
            out.flush()?;
            Ok(exit_codes::SUCCESS)
        }

        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "nanodiff", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        None => {
            let args = cli.diff;
            let expected = args
                .expected
                .clone()
                .context_none("Missing argument for path to expected output")?;
            let actual = args
                .actual
                .clone()
                .context_none("Missing argument for path to actual output")?;

            let (config, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &args.overrides());
            if let Some(path) = loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }

            cli::run_diff(config.into_diff_config(expected, actual))
        }
    }
}
