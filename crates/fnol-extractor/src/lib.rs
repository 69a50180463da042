//! FNOL Extractor
//!
//! Converts semi-structured First Notice of Loss text into an
//! [`ExtractedFieldTree`](fnol_domain::ExtractedFieldTree).
//!
//! # Overview
//!
//! Extraction is literal pattern matching against the label vocabulary FNOL
//! forms use ("Policy Number:", "Incident Date:", "Estimated Damage:", ...).
//! Each field has one independent rule applied to the whole text; the first
//! match wins. A rule that finds nothing leaves its field absent, so
//! extraction never fails on arbitrary input.
//!
//! # Architecture
//!
//! ```text
//! file → loader → text → FieldPatternExtractor → ExtractedFieldTree
//! ```
//!
//! # Example Usage
//!
//! ```
//! use fnol_extractor::FieldPatternExtractor;
//!
//! let extractor = FieldPatternExtractor::default_config();
//! let tree = extractor.extract_fields("Policy Number: POL-2024-001\nClaim Type: auto\n");
//!
//! assert_eq!(tree.policy_number(), Some("POL-2024-001"));
//! assert_eq!(tree.claim_type(), Some("auto"));
//! assert!(tree.claimant().is_none());
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
pub mod loader;
mod patterns;
mod text;


pub use config::ExtractorConfig;
pub use error::{ExtractorError, LoaderError};
pub use extractor::{extract_fields, FieldPatternExtractor};
pub use loader::{is_supported_document, load_document, DocumentFormat};
