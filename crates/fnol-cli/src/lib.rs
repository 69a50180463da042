//! FNOL CLI library.
//!
//! This library provides the core functionality for the `fnol` command-line
//! interface: configuration management, the claims processing pipeline,
//! command execution and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod processor;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use processor::{BatchEntry, BatchFailure, BatchSummary, ClaimsProcessor};
