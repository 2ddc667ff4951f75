//! CLI argument definitions for the field cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use fieldclean_core::OutputFormat;
use fieldclean_model::NameRepairMode;

#[derive(Parser)]
#[command(
    name = "fieldclean",
    version,
    about = "Clean and validate name, email and phone columns in CSV files",
    long_about = "Clean and validate name, email and phone columns in CSV files.\n\n\
                  Every configured column gains <label>_corrigido, <label>_valido and\n\
                  <label>_sugestao columns. Output is CSV or a sheet-values JSON body."
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

    /// Allow cell values in trace logs.
    ///
    /// Names, emails and phones are personal data; they are redacted unless
    /// this flag is set.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize and validate the configured fields of a CSV file.
    Clean(CleanArgs),

    /// Trim headers and cells without any field validation.
    Trim(TrimArgs),

    /// List the configured fields and the columns they produce.
    Fields(FieldsArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// CSV file with a header row.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: <INPUT stem>_limpo.csv next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: FormatArg,

    /// TOML file with field definitions and handler options.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// How names split by stray whitespace are repaired (overrides the config).
    #[arg(long = "name-strategy", value_enum)]
    pub name_strategy: Option<NameStrategyArg>,

    /// Skip the generic canonicalization of every cell.
    #[arg(long = "no-canonicalize")]
    pub no_canonicalize: bool,

    /// Trim whitespace around header names before matching fields.
    #[arg(long = "trim-headers")]
    pub trim_headers: bool,

    /// Write the per-field summary as JSON.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Clean and summarize without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct TrimArgs {
    /// CSV file with a header row.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: <INPUT stem>_limpo.csv next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: FormatArg,
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// TOML file with field definitions.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Csv,
    SheetJson,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::SheetJson => OutputFormat::SheetJson,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum NameStrategyArg {
    RemoveAllWhitespace,
    JoinLowercaseFragments,
}

impl From<NameStrategyArg> for NameRepairMode {
    fn from(value: NameStrategyArg) -> Self {
        match value {
            NameStrategyArg::RemoveAllWhitespace => NameRepairMode::RemoveAllWhitespace,
            NameStrategyArg::JoinLowercaseFragments => NameRepairMode::JoinLowercaseFragments,
        }
    }
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
