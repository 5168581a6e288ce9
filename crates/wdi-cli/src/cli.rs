//! CLI argument definitions for the indicator explorer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use wdi_ingest::{DEFAULT_METADATA_FILE, DEFAULT_VALUES_FILE};

#[derive(Parser)]
#[command(
    name = "wdi",
    version,
    about = "World Bank indicator explorer",
    long_about = "Explore World Bank development indicators by country and year.\n\n\
                  Lists the tracked indicators, shows one country's series as line and\n\
                  bar charts, and compares up to three countries on one chart."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Wide indicator-value table (CSV export).
    #[arg(long = "data", value_name = "CSV", default_value = DEFAULT_VALUES_FILE, global = true)]
    pub data: PathBuf,

    /// Indicator metadata table (CSV export).
    #[arg(long = "metadata", value_name = "CSV", default_value = DEFAULT_METADATA_FILE, global = true)]
    pub metadata: PathBuf,

    /// Page output format.
    #[arg(long = "format", value_enum, default_value = "pretty", global = true)]
    pub format: FormatArg,

    /// Write each chart as a Plotly JSON figure into this directory.
    #[arg(long = "chart-dir", value_name = "DIR", global = true)]
    pub chart_dir: Option<PathBuf>,

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
    /// Describe the indicators and optionally show sample rows.
    Home(HomeArgs),

    /// Show one country's rows and chart one indicator.
    Check(CheckArgs),

    /// Chart one indicator for up to three countries.
    Compare(CompareArgs),

    /// List the countries present in the value table.
    Countries,

    /// List the described indicators with their English and Arabic names.
    Indicators,

    /// Read one JSON selection per stdin line and render a page for each.
    Session,
}

#[derive(Args)]
pub struct HomeArgs {
    /// Show the first rows of the value table.
    #[arg(long = "samples")]
    pub samples: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Country to show (default: Egypt, Arab Rep., or the first country).
    #[arg(long = "country", value_name = "NAME")]
    pub country: Option<String>,

    /// Indicator code to chart (default: the first described indicator).
    #[arg(long = "indicator", value_name = "CODE")]
    pub indicator: Option<String>,

    /// Build the line and bar charts.
    #[arg(long = "visualize")]
    pub visualize: bool,
}

#[derive(Args)]
pub struct CompareArgs {
    /// Country to compare; repeat up to three times. Without any, all three
    /// slots use the default country.
    #[arg(long = "country", value_name = "NAME")]
    pub countries: Vec<String>,

    /// Indicator code to chart (default: the first described indicator).
    #[arg(long = "indicator", value_name = "CODE")]
    pub indicator: Option<String>,

    /// Build the comparison chart.
    #[arg(long = "visualize")]
    pub visualize: bool,
}

/// Page output format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Pretty,
    Json,
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
