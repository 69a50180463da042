//! Error types for the Extractor
//!
//! Field extraction itself never fails; these errors belong to configuration
//! and to loading documents from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the extractor crate
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Document could not be loaded
    #[error(transparent)]
    Loader(#[from] LoaderError),
}

/// Errors raised while turning a file into text
#[derive(Error, Debug)]
pub enum LoaderError {
    /// File does not exist
    #[error("Document not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Extension is neither plain text nor PDF
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// File exists but its content could not be decoded to text
    #[error("Failed to decode {}: {reason}", path.display())]
    Decode {
        /// Offending file
        path: PathBuf,
        /// Decoder message
        reason: String,
    },

    /// PDF document given but the crate was built without the `pdf` feature
    #[error("PDF support not enabled (rebuild with the `pdf` feature)")]
    PdfSupportDisabled,

    /// I/O error while reading the file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
