//! World Bank indicator explorer CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;
use wdi_cli::logging::{LogConfig, LogFormat, init_logging};
use wdi_cli::output::{OutputFormat, OutputOptions};
use wdi_ingest::DataPaths;

mod cli;
mod commands;

use crate::cli::{Cli, Command, FormatArg, LogFormatArg, LogLevelArg};
use crate::commands::{
    load_store, run_check, run_compare, run_countries, run_home, run_indicators, run_interactive,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let paths = DataPaths::new(cli.data.clone(), cli.metadata.clone());
    let store = match load_store(&paths) {
        Ok(store) => store,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    };

    let options = output_options_from_cli(&cli);
    let result = match &cli.command {
        Command::Home(args) => run_home(&store, args, &options),
        Command::Check(args) => run_check(&store, args, &options),
        Command::Compare(args) => run_compare(&store, args, &options),
        Command::Countries => run_countries(&store, &options),
        Command::Indicators => run_indicators(&store, &options),
        Command::Session => run_interactive(&store, &options).map(|_| ()),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn output_options_from_cli(cli: &Cli) -> OutputOptions {
    OutputOptions {
        format: match cli.format {
            FormatArg::Pretty => OutputFormat::Pretty,
            FormatArg::Json => OutputFormat::Json,
        },
        chart_dir: cli.chart_dir.clone(),
        styled: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        },
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
