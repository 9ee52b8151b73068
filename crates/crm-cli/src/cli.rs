//! CLI argument definitions for the CRM CSV tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "crm-csv",
    version,
    about = "Import, validate, and export CRM contact CSV files",
    long_about = "Import CRM contact lists from CSV and export records back to CSV.\n\n\
                  Detects comma, semicolon, and tab delimiters, validates rows\n\
                  against an import profile, and remaps columns to CRM fields."
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

    /// Include cell values in trace logs (contact data is redacted otherwise).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse and validate a CSV file, then apply the profile's field mapping.
    Import(ImportArgs),

    /// Export a JSON array of records to CSV.
    Export(ExportArgs),

    /// Print the delimiter detected from a CSV file's first line.
    Detect(DetectArgs),
}

#[derive(Parser)]
pub struct ImportArgs {
    /// CSV file to import.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Import profile JSON with optional `schema`, `rules`, and `mapping` sections.
    #[arg(long = "profile", value_name = "PATH")]
    pub profile: Option<PathBuf>,

    /// Write the imported records as a JSON array.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Keep rows that failed validation in the output.
    #[arg(long = "keep-invalid")]
    pub keep_invalid: bool,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// JSON file holding an array of records.
    #[arg(value_name = "JSON")]
    pub input: PathBuf,

    /// Columns to export, as dot paths into each record.
    #[arg(long = "columns", value_delimiter = ',', required = true, num_args = 1..)]
    pub columns: Vec<String>,

    /// Field delimiter (a single character, or `tab`).
    #[arg(long = "delimiter", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: char,

    /// Omit the header line.
    #[arg(long = "no-headers")]
    pub no_headers: bool,

    /// Prepend a UTF-8 byte-order mark.
    #[arg(long = "bom")]
    pub bom: bool,

    /// Output CSV path (stdout when omitted).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct DetectArgs {
    /// CSV file to inspect.
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

/// Parses a delimiter argument: one character, `tab`, or the escape `\t`.
pub fn parse_delimiter(value: &str) -> Result<char, String> {
    if matches!(value, "tab" | "\\t") {
        return Ok('\t');
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !matches!(c, '"' | '\r' | '\n') => Ok(c),
        (Some(_), None) => Err(format!("{value:?} cannot be used as a delimiter")),
        _ => Err(format!("delimiter must be a single character, got {value:?}")),
    }
}
