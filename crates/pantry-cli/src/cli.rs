//! CLI argument definitions for the organization importer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pantry-import",
    version,
    about = "Pantry CRM importer - Normalize organization spreadsheets",
    long_about = "Normalize exported organization spreadsheets into canonical CRM records.\n\n\
                  Locates the real header row in messy exports, maps vendor column\n\
                  phrasings onto canonical fields, and reports every row that needs review."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse spreadsheet exports into canonical organization records.
    Parse(ParseArgs),

    /// Write a blank import template with the canonical headers.
    Template(TemplateArgs),

    /// List the canonical fields and the header phrasings mapped to them.
    Fields,
}

#[derive(Parser)]
pub struct ParseArgs {
    /// CSV files to parse.
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Take row zero as the header instead of scoring candidate rows.
    ///
    /// Use this for files that are known to start with the header, such
    /// as templates produced by the `template` subcommand.
    #[arg(long = "header-row-zero")]
    pub header_row_zero: bool,

    /// Reject rows with unrecognized priority, segment, or type values.
    ///
    /// By default unrecognized values fall back to documented defaults
    /// and the row imports with an advisory. With this flag the row is
    /// rejected instead.
    #[arg(long = "strict-enums")]
    pub strict_enums: bool,

    /// JSON overlay extending the built-in alias and enum tables.
    #[arg(long = "schema-overlay", value_name = "PATH")]
    pub schema_overlay: Option<PathBuf>,

    /// Directory for per-file JSON batch reports.
    #[arg(long = "report-json", value_name = "DIR")]
    pub report_json: Option<PathBuf>,

    /// Directory for per-file rejected-row CSVs.
    #[arg(long = "rejects", value_name = "DIR")]
    pub rejects: Option<PathBuf>,
}

#[derive(Parser)]
pub struct TemplateArgs {
    /// Destination for the template CSV (stdout when omitted).
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
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
