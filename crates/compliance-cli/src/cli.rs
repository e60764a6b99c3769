//! CLI argument definitions for the compliance wizard.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "compliance-wizard",
    version,
    about = "Dataset compliance editing helpers",
    long_about = "Shape dropdown options, order wizard steps and sanitize compliance \
                  entities for a dataset compliance editor.\n\n\
                  Inputs and outputs are JSON so a presentation layer can consume them directly."
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
    /// Print the ordered wizard steps for a dataset.
    Steps(StepsArgs),

    /// Print field identifier options for a compliance data type catalog.
    Options(CatalogArgs),

    /// Print field format options for one entry of a catalog.
    Formats(FormatsArgs),

    /// Print the security classification options.
    Classifications(OutputArgs),

    /// Filter and strip compliance entities before submission.
    Sanitize(SanitizeArgs),

    /// Print the user-facing message table.
    Strings(StringsArgs),
}

#[derive(Parser)]
pub struct OutputArgs {
    /// Output style.
    #[arg(long = "output", value_enum, default_value = "json")]
    pub output: OutputArg,
}

#[derive(Parser)]
pub struct StepsArgs {
    /// The dataset has no field schema (dataset-level compliance only).
    #[arg(long = "no-schema")]
    pub no_schema: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct CatalogArgs {
    /// JSON file holding an array of compliance data types.
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct FormatsArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Field identifier whose formats to list (e.g. MEMBER_ID).
    #[arg(long = "id", value_name = "FIELD_ID")]
    pub id: String,
}

#[derive(Parser)]
pub struct SanitizeArgs {
    /// JSON file holding an array of compliance entities.
    #[arg(value_name = "ENTITIES")]
    pub entities: PathBuf,

    /// Keep entities marked read-only (the marker itself is still removed).
    #[arg(long = "keep-readonly")]
    pub keep_readonly: bool,

    /// Write the result to a file instead of stdout.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(Parser)]
pub struct StringsArgs {
    /// Print a single message (e.g. missingPurgePolicy, helpText.classification).
    #[arg(long = "key", value_name = "KEY", conflicts_with = "hidden_tracking_fields")]
    pub key: Option<String>,

    /// Print the hidden tracking fields markup.
    #[arg(long = "hidden-tracking-fields")]
    pub hidden_tracking_fields: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Json,
    Table,
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
