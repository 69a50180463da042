//! FNOL Router
//!
//! Assigns a claim to a handling queue from its extracted fields and the
//! list of missing mandatory fields.
//!
//! Rules are evaluated in strict priority order and the first one that
//! applies decides:
//!
//! 1. Missing mandatory fields → Manual Review
//! 2. Fraud keywords in the description → Investigation Flag
//! 3. Injury claim type → Specialist Queue
//! 4. Resolved damage below the threshold → Fast-track
//! 5. Otherwise → Standard Processing
//!
//! # Examples
//!
//! ```
//! use fnol_domain::{ExtractedFieldTree, MandatoryField, Route};
//! use fnol_router::RoutingEngine;
//!
//! let engine = RoutingEngine::default_config();
//! let result = engine.route(&ExtractedFieldTree::default(), &[MandatoryField::Claimant]);
//!
//! assert_eq!(result.route, Route::ManualReview);
//! ```

#![warn(missing_docs)]

pub mod config;
mod engine;
pub mod rules;

pub use config::{ConfigError, RoutingConfig};
pub use engine::RoutingEngine;
pub use rules::RoutingRule;

/// Router error
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
