//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "risk-profile",
    version,
    about = "Risk Profile Studio - patient risk scores and survival curves",
    long_about = "Score a patient cohort against a survival-model bundle.\n\n\
                  Parses CSV and Excel uploads, classifies each subject's risk\n\
                  against the bundle's reference quantiles, and exports\n\
                  per-subject survival probabilities as CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Allow row-level patient values in logs (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score a cohort file and export per-subject survival probabilities.
    Predict(PredictArgs),

    /// Parse a cohort file and report its column profiles.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct PredictArgs {
    /// Cohort file (.csv, .xlsx, or .xls).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Model bundle JSON (feature list, risk reference, decay parameters).
    ///
    /// Without a bundle, every fully-numeric column except the identifier
    /// becomes a feature and risk bands are left unclassified.
    #[arg(long = "bundle", value_name = "PATH")]
    pub bundle: Option<PathBuf>,

    /// Output CSV path (default: a dated file beside the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Survival timepoint to sample; repeat for multiple timepoints.
    #[arg(
        long = "timepoint",
        value_name = "TIME",
        default_values_t = [365.0, 1095.0, 1825.0]
    )]
    pub timepoints: Vec<f64>,

    /// Curve horizon override for the mocked model.
    #[arg(long = "horizon", value_name = "TIME")]
    pub horizon: Option<f64>,

    /// Run predictions and report without writing the export file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Cohort file (.csv, .xlsx, or .xls).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
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
