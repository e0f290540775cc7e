//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tidy_cli::options::{parse_conversion, parse_missing};
use tidy_model::{MissingStrategy, TargetType};

#[derive(Parser)]
#[command(
    name = "tidy",
    version,
    about = "Profile and clean CSV and spreadsheet files",
    long_about = "Profile and clean tabular data files.\n\n\
                  Reads CSV, XLSX and XLS inputs, reports per-column quality and\n\
                  applies missing-value handling, duplicate removal, column removal\n\
                  and type conversion in a fixed order."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show shape, duplicates and per-column quality of a file.
    Profile(ProfileArgs),

    /// Apply cleaning steps to a file and write the cleaned copy.
    Clean(CleanArgs),
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// CSV, XLSX or XLS file to inspect.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the profile as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Number of leading rows to preview.
    #[arg(long = "preview-rows", value_name = "N", default_value_t = 5)]
    pub preview_rows: usize,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// CSV, XLSX or XLS file to clean.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// JSON cleaning configuration; flags below are applied on top of it.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Missing-value strategy: none, drop_rows, drop_columns, fill_mean,
    /// fill_median or fill_mode.
    #[arg(long = "missing", value_name = "STRATEGY", value_parser = parse_missing)]
    pub missing: Option<MissingStrategy>,

    /// Remove rows that repeat an earlier row.
    #[arg(long = "remove-duplicates")]
    pub remove_duplicates: bool,

    /// Column to remove (repeatable).
    #[arg(long = "drop", value_name = "COLUMN")]
    pub drop: Vec<String>,

    /// Conversion request such as `age=numeric` (repeatable). Types: keep,
    /// numeric, datetime, text, categorical.
    #[arg(long = "convert", value_name = "COLUMN=TYPE", value_parser = parse_conversion)]
    pub convert: Vec<(String, TargetType)>,

    /// Output directory (default: next to the input file).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip the JSON processing report.
    #[arg(long = "no-report")]
    pub no_report: bool,

    /// Run the pipeline and print the summary without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
