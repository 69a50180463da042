//! Gatekeeper error types

use thiserror::Error;

/// Errors that can occur during gatekeeper operations
///
/// Checking a field tree never fails; only building a gatekeeper from
/// configuration can.
#[derive(Error, Debug)]
pub enum GatekeeperError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
