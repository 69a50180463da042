//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extraction or document loading error
    #[error("{0}")]
    Extractor(#[from] fnol_extractor::ExtractorError),

    /// Gatekeeper error
    #[error("Gatekeeper error: {0}")]
    Gatekeeper(#[from] fnol_gatekeeper::GatekeeperError),

    /// Routing error
    #[error("Router error: {0}")]
    Router(#[from] fnol_router::RouterError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
