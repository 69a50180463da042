//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(args: ConfigArgs, config_path: &Path, formatter: &Formatter) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(config_path, formatter),
        ConfigAction::Init { force } => init_config(config_path, force, formatter),
    }
}

/// Print the effective configuration.
fn show_config(config_path: &Path, formatter: &Formatter) -> Result<()> {
    let config = if config_path.exists() {
        eprintln!(
            "{}",
            formatter.info(&format!("Configuration from {}", config_path.display()))
        );
        Config::load_from(config_path)?
    } else {
        eprintln!(
            "{}",
            formatter.info(&format!("No file at {}, showing defaults", config_path.display()))
        );
        Config::default()
    };

    println!("{}", config.to_toml()?);
    Ok(())
}

/// Write the default configuration.
fn init_config(config_path: &Path, force: bool, formatter: &Formatter) -> Result<()> {
    if config_path.exists() && !force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        )));
    }

    Config::default().save_to(config_path)?;
    println!(
        "{}",
        formatter.success(&format!("Wrote default configuration to {}", config_path.display()))
    );
    Ok(())
}
