//! FNOL CLI - Command-line interface for FNOL claim triage.

use clap::Parser;
use fnol_cli::commands;
use fnol_cli::config::OutputFormat;
use fnol_cli::cli::CliFormat;
use fnol_cli::{ClaimsProcessor, Cli, Command, Config, Formatter};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> fnol_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        // Config commands manage the file themselves and must work when it is broken
        Command::Config(args) => {
            let config_path = match cli.config {
                Some(path) => path,
                None => Config::path()?,
            };
            let format = cli.format.map(Into::into).unwrap_or(OutputFormat::Table);
            let formatter = Formatter::new(format, !cli.no_color);
            commands::execute_config(args, &config_path, &formatter)
        }
        Command::Process(args) => {
            let (processor, formatter) = prepare(cli.config.as_deref(), cli.format, cli.no_color)?;
            commands::execute_process(args, &processor, &formatter)
        }
        Command::Batch(args) => {
            let (processor, formatter) = prepare(cli.config.as_deref(), cli.format, cli.no_color)?;
            commands::execute_batch(args, &processor, &formatter)
        }
    }
}

/// Load configuration and build the pipeline and formatter from it
fn prepare(
    config_path: Option<&Path>,
    format: Option<CliFormat>,
    no_color: bool,
) -> fnol_cli::Result<(ClaimsProcessor, Formatter)> {
    // Explicit config must exist; the default location is optional
    let config = match config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Determine output format
    let format = format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !no_color && config.settings.color;

    let processor = ClaimsProcessor::from_config(&config)?;
    Ok((processor, Formatter::new(format, color_enabled)))
}

/// Log to stderr: warn by default, `-v` info, `-vv` debug, `RUST_LOG` wins
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
