//! CLI argument definitions for the ventas batch pipeline.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ventas-cli",
    version,
    about = "Clean and normalize a sales CSV export",
    long_about = "Apply the fixed cleaning pipeline to a CSV file:\n\
                  column-name normalization, incomplete-row removal, positive-value\n\
                  filtering, key dedupe, 0-100 normalization, and text uppercasing."
)]
pub struct Cli {
    /// Input CSV path.
    #[arg(long = "input", value_name = "PATH")]
    pub input: PathBuf,

    /// Output CSV path.
    #[arg(long = "output", value_name = "PATH")]
    pub output: PathBuf,

    /// Column that must hold positive values; also the normalization target.
    #[arg(long = "column", value_name = "NAME", default_value = "ventas")]
    pub column: String,

    /// Key column for duplicate removal (skipped when absent).
    #[arg(long = "key-col", value_name = "NAME", default_value = "cliente")]
    pub key_col: String,

    /// Text column to uppercase into `<name>_upper` (skipped when absent).
    #[arg(long = "upper-col", value_name = "NAME", default_value = "cliente")]
    pub upper_col: String,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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
