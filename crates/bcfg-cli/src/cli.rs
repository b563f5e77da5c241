//! CLI argument definitions for the building configurator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use bcfg_model::TemplateType;

#[derive(Parser)]
#[command(
    name = "building-configurator",
    version,
    about = "Steel building configurator - replay edits against the configuration store",
    long_about = "Drive the building configuration store from the command line.\n\n\
                  Lists templates and the colour palette, and replays JSON action\n\
                  scripts with undo/redo history."
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

    /// Settings file to use instead of the platform config directory.
    #[arg(long = "settings", value_name = "PATH", global = true)]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the building templates.
    Templates,

    /// List the RAL colour palette.
    Palette,

    /// Replay a JSON action script and report the final state.
    Run(RunArgs),

    /// Show the effective settings, or write them out.
    Settings(SettingsArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// JSON file holding an array of actions.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Initialize the building from this template before the script runs.
    ///
    /// Overrides `general.default_template` from the settings file.
    #[arg(long = "template", value_name = "TEMPLATE")]
    pub template: Option<TemplateType>,

    /// Print the report as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Include the panel view models in the JSON report.
    #[arg(long = "views", requires = "json")]
    pub views: bool,
}

#[derive(Parser)]
pub struct SettingsArgs {
    /// Write the effective settings to the settings path.
    #[arg(long = "write")]
    pub write: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
