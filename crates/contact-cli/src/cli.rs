//! CLI argument definitions for the contact formatter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "contact-formatter",
    version,
    about = "Contact Formatter - Normalize contact spreadsheets for CRM import",
    long_about = "Map an arbitrary contact spreadsheet (.xlsx or .csv) onto a fixed\n\
                  contact schema using header heuristics, optionally clean the result\n\
                  through a language-model service, and export it as CSV or XLSX."
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

    /// Allow row-level contact values (PII) in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert one spreadsheet into formatted contact output.
    Convert(ConvertArgs),

    /// List the target contact schema fields and their header keywords.
    Fields,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Path to the contact spreadsheet (.xlsx or .csv).
    #[arg(value_name = "SPREADSHEET")]
    pub input: PathBuf,

    /// Output CSV path (default: formatted_contacts.csv beside the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: OutputFormatArg,

    /// Column-mapping profile.
    ///
    /// standard: keyword matching, DOB keywords, empty unmapped columns kept.
    /// registration: DOB slot filled from the "Date Registered" column,
    /// empty unmapped columns dropped.
    /// positional: keyword matching with first/second-column fallbacks for
    /// name and DOB.
    #[arg(long = "profile", value_enum, default_value = "standard")]
    pub profile: ProfileArg,

    /// Drop unmapped columns whose value is empty after trimming.
    #[arg(long = "skip-empty-extras", conflicts_with = "keep_empty_extras")]
    pub skip_empty_extras: bool,

    /// Keep empty unmapped columns even under a profile that drops them.
    #[arg(long = "keep-empty-extras", conflicts_with = "skip_empty_extras")]
    pub keep_empty_extras: bool,

    /// Send the mapped records to the enhancement service for cleanup.
    ///
    /// Requires CONTACT_FORMATTER_API_KEY. On any service failure the
    /// mapped records are exported unchanged.
    #[arg(long = "enhance")]
    pub enhance: bool,

    /// Map and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Xlsx,
    Both,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ProfileArg {
    Standard,
    Registration,
    Positional,
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
