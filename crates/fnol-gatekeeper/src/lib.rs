//! FNOL Gatekeeper
//!
//! Checks an extracted field tree for mandatory fields before routing.
//!
//! The Gatekeeper provides:
//! - Missing-field detection in a fixed, reproducible order
//! - A completeness summary for reporting
//!
//! # Examples
//!
//! ```
//! use fnol_domain::{ExtractedFieldTree, MandatoryField};
//! use fnol_gatekeeper::{Gatekeeper, ValidationConfig};
//!
//! let gatekeeper = Gatekeeper::new(ValidationConfig::default());
//! let missing = gatekeeper.identify_missing_fields(&ExtractedFieldTree::default());
//!
//! assert_eq!(missing.len(), 8);
//! assert_eq!(missing[0], MandatoryField::PolicyNumber);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod validator;

pub use config::ValidationConfig;
pub use error::GatekeeperError;
pub use validator::{Gatekeeper, ValidationResult, ValidationStatus};
