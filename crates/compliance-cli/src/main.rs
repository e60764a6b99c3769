//! Compliance wizard CLI.

use std::fs;
use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use compliance_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg, OutputArg};
use compliance_cli::commands::{
    StringsOutput, run_classifications, run_formats, run_options, run_sanitize, run_steps,
    run_strings,
};
use compliance_cli::logging::{LogConfig, LogFormat, init_logging};
use compliance_cli::summary::{options_table, steps_table};
use serde::Serialize;
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli.command) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Steps(args) => {
            let steps = run_steps(!args.no_schema);
            match args.output.output {
                OutputArg::Json => print_json(&steps),
                OutputArg::Table => {
                    println!("{}", steps_table(&steps));
                    Ok(())
                }
            }
        }
        Command::Options(args) => {
            let options = run_options(&args.catalog)?;
            match args.output.output {
                OutputArg::Json => print_json(&options),
                OutputArg::Table => {
                    println!(
                        "{}",
                        options_table(&options, |value| Some(value.as_str().to_string()))
                    );
                    Ok(())
                }
            }
        }
        Command::Formats(args) => {
            let options = run_formats(&args.catalog.catalog, &args.id)?;
            match args.catalog.output.output {
                OutputArg::Json => print_json(&options),
                OutputArg::Table => {
                    println!(
                        "{}",
                        options_table(&options, |value| {
                            value.map(|format| format.as_str().to_string())
                        })
                    );
                    Ok(())
                }
            }
        }
        Command::Classifications(args) => {
            let options = run_classifications();
            match args.output {
                OutputArg::Json => print_json(&options),
                OutputArg::Table => {
                    println!(
                        "{}",
                        options_table(&options, |value| {
                            value.map(|classification| classification.as_str().to_string())
                        })
                    );
                    Ok(())
                }
            }
        }
        Command::Sanitize(args) => {
            let entities = run_sanitize(&args.entities, args.keep_readonly)?;
            match args.out {
                Some(path) => {
                    let text = serde_json::to_string_pretty(&entities)?;
                    fs::write(&path, text)
                        .with_context(|| format!("write {}", path.display()))?;
                    tracing::info!(path = %path.display(), "wrote sanitized entities");
                    Ok(())
                }
                None => print_json(&entities),
            }
        }
        Command::Strings(args) => {
            match run_strings(args.key.as_deref(), args.hidden_tracking_fields)? {
                StringsOutput::Table(value) => print_json(&value),
                StringsOutput::Text(text) => {
                    println!("{text}");
                    Ok(())
                }
            }
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig::default().with_level_filter(cli.verbosity.tracing_level_filter());
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
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
        .with_format(format)
        .with_log_file(cli.log_file.clone())
        .with_timestamps(cli.log_file.is_some())
        .with_ansi(with_ansi)
}
