//! Document loading
//!
//! Turns a file on disk into the plain text the extractor reads. Plain text
//! is read as UTF-8; PDF text extraction is behind the `pdf` feature.

use crate::error::LoaderError;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Supported document formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.txt`
    PlainText,
    /// `.pdf`
    Pdf,
}

impl DocumentFormat {
    /// Detect the format from a path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self, LoaderError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "txt" => Ok(DocumentFormat::PlainText),
            "pdf" => Ok(DocumentFormat::Pdf),
            "" => Err(LoaderError::UnsupportedFormat("(no extension)".to_string())),
            other => Err(LoaderError::UnsupportedFormat(format!(".{}", other))),
        }
    }
}

/// Whether a path has an extension the loader understands
pub fn is_supported_document(path: &Path) -> bool {
    DocumentFormat::from_path(path).is_ok()
}

/// Load the text content of a document
///
/// # Errors
///
/// - [`LoaderError::NotFound`] if the path does not exist
/// - [`LoaderError::UnsupportedFormat`] for extensions other than `.txt`/`.pdf`
/// - [`LoaderError::Decode`] if the content is not valid text
/// - [`LoaderError::PdfSupportDisabled`] for PDFs without the `pdf` feature
pub fn load_document(path: impl AsRef<Path>) -> Result<String, LoaderError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoaderError::NotFound(path.to_path_buf()));
    }

    let format = DocumentFormat::from_path(path).map_err(|e| {
        warn!("Rejecting {}: {}", path.display(), e);
        e
    })?;

    let text = match format {
        DocumentFormat::PlainText => load_plain_text(path)?,
        DocumentFormat::Pdf => load_pdf(path)?,
    };

    debug!("Loaded {} chars from {}", text.len(), path.display());
    Ok(text)
}

fn load_plain_text(path: &Path) -> Result<String, LoaderError> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|e| LoaderError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Page texts, each followed by a newline
#[cfg(feature = "pdf")]
fn load_pdf(path: &Path) -> Result<String, LoaderError> {
    let pages = pdf_extract::extract_text_by_pages(path).map_err(|e| LoaderError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut text = String::new();
    for page in pages {
        text.push_str(&page);
        text.push('\n');
    }
    Ok(text)
}

#[cfg(not(feature = "pdf"))]
fn load_pdf(path: &Path) -> Result<String, LoaderError> {
    warn!("Cannot read {}: built without the `pdf` feature", path.display());
    Err(LoaderError::PdfSupportDisabled)
}
