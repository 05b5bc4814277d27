//! CLI argument definitions for deckport.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use deckport_map::{PREVIEW_ROWS, Preset};

#[derive(Parser)]
#[command(
    name = "deckport",
    version,
    about = "deckport - Move trading card lists between CSV layouts",
    long_about = "Import, merge and export trading card lists as CSV.\n\n\
                  Column layouts come from built-in presets (Default, Moxfield)\n\
                  or from JSON settings files describing a custom mapping."
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
    /// Re-map a CSV card list from one column layout to another.
    Convert(ConvertArgs),

    /// Add cards from the lookup service's JSON output to a list.
    Add(AddArgs),

    /// Preview a CSV file and show how the import settings read it.
    Inspect(InspectArgs),

    /// List the built-in import and export presets.
    Presets,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// CSV file to import.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: cards.csv). Use '-' for stdout.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub import: ImportArgs,

    #[command(flatten)]
    pub export: ExportArgs,
}

#[derive(Args)]
pub struct AddArgs {
    /// JSON file with one card, an array of cards, or a list object with a
    /// `data` array, as returned by the card lookup service.
    #[arg(value_name = "CARDS_JSON")]
    pub cards: PathBuf,

    /// Existing CSV list to add to (read with the import settings).
    #[arg(long = "into", value_name = "CSV")]
    pub into: Option<PathBuf>,

    /// Output file (default: cards.csv). Use '-' for stdout.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub import: ImportArgs,

    #[command(flatten)]
    pub export: ExportArgs,
}

#[derive(Args)]
pub struct InspectArgs {
    /// CSV file to preview.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Number of rows to preview.
    #[arg(long = "rows", default_value_t = PREVIEW_ROWS)]
    pub rows: usize,

    #[command(flatten)]
    pub import: ImportArgs,
}

/// Flags selecting how CSV input is read.
#[derive(Args, Default)]
pub struct ImportArgs {
    /// Built-in import layout.
    #[arg(long = "import-preset", value_enum, value_name = "PRESET")]
    pub import_preset: Option<PresetArg>,

    /// JSON file with custom import settings (overrides --import-preset).
    #[arg(
        long = "import-settings",
        value_name = "JSON",
        conflicts_with = "import_preset"
    )]
    pub import_settings: Option<PathBuf>,

    /// Treat the first row as data rather than a header.
    #[arg(long = "no-skip-first")]
    pub no_skip_first: bool,
}

/// Flags selecting how CSV output is written.
#[derive(Args, Default)]
pub struct ExportArgs {
    /// Built-in export layout.
    #[arg(long = "export-preset", value_enum, value_name = "PRESET")]
    pub export_preset: Option<PresetArg>,

    /// JSON file with custom export settings (overrides --export-preset).
    #[arg(
        long = "export-settings",
        value_name = "JSON",
        conflicts_with = "export_preset"
    )]
    pub export_settings: Option<PathBuf>,

    /// Do not write a header row.
    #[arg(long = "no-headers")]
    pub no_headers: bool,
}

/// CLI preset choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum PresetArg {
    Default,
    Moxfield,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Default => Preset::Default,
            PresetArg::Moxfield => Preset::Moxfield,
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
