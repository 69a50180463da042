//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// FNOL triage - extract, validate and route insurance claim documents.
#[derive(Debug, Parser)]
#[command(name = "fnol")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "FNOL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (route only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Process a single FNOL document
    Process(ProcessArgs),

    /// Process every document in a directory
    Batch(BatchArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for the process command.
#[derive(Debug, Parser)]
pub struct ProcessArgs {
    /// Document to process (.txt or .pdf)
    pub file: PathBuf,

    /// Also write the result JSON to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the batch command.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// Directory containing FNOL documents
    #[arg(default_value = "sample_documents")]
    pub dir: PathBuf,

    /// Directory for `<name>_result.json` files
    #[arg(short, long, default_value = "output")]
    pub output_dir: PathBuf,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_command() {
        let cli = Cli::parse_from(["fnol", "process", "claim.txt", "--output", "out.json"]);
        match cli.command {
            Command::Process(args) => {
                assert_eq!(args.file, PathBuf::from("claim.txt"));
                assert_eq!(args.output, Some(PathBuf::from("out.json")));
            }
            _ => panic!("Expected Process command"),
        }
    }

    #[test]
    fn test_batch_defaults() {
        let cli = Cli::parse_from(["fnol", "batch"]);
        match cli.command {
            Command::Batch(args) => {
                assert_eq!(args.dir, PathBuf::from("sample_documents"));
                assert_eq!(args.output_dir, PathBuf::from("output"));
            }
            _ => panic!("Expected Batch command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["fnol", "process", "claim.txt", "-f", "json", "-vv", "--no-color"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::parse_from(["fnol", "config", "init", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            }) => assert!(force),
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Quiet.into();
        assert_eq!(format, crate::config::OutputFormat::Quiet);
    }
}
