//! deckport CLI.

use clap::{ColorChoice, Parser};
use deckport_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use deckport_cli::commands::{run_add, run_convert, run_inspect, run_presets};
use deckport_cli::logging::{LogConfig, LogFormat, init_logging};
use deckport_cli::render::{print_add_summary, print_convert_summary, print_inspect};
use std::io::{self, IsTerminal, Write};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match cli.command {
        Command::Convert(args) => run_convert(&args).and_then(|report| {
            // Keep stdout clean when the list itself was written there.
            let printed = if report.output.is_stdout() {
                print_convert_summary(&mut io::stderr(), &report)
            } else {
                print_convert_summary(&mut io::stdout(), &report)
            };
            Ok(printed?)
        }),
        Command::Add(args) => run_add(&args).and_then(|report| {
            let printed = if report.output.is_stdout() {
                print_add_summary(&mut io::stderr(), &report)
            } else {
                print_add_summary(&mut io::stdout(), &report)
            };
            Ok(printed?)
        }),
        Command::Inspect(args) => {
            run_inspect(&args).and_then(|report| Ok(print_inspect(&mut io::stdout(), &report)?))
        }
        Command::Presets => run_presets(),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            let _ = io::stdout().flush();
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let mut config = LogConfig::default()
        .with_level_filter(level_filter)
        .with_format(format)
        .with_log_file(cli.log_file.clone());
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
