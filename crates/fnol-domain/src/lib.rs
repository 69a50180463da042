//! FNOL Domain Layer
//!
//! This crate contains the value types shared by every stage of the FNOL
//! triage pipeline. It holds no behaviour beyond small accessors and
//! formatting helpers; extraction, validation and routing live in their own
//! crates and only ever read these types.
//!
//! ## Key Concepts
//!
//! - **Field tree**: [`ExtractedFieldTree`], the structured result of reading
//!   one FNOL document. Every leaf is an `Option`: absence means the text
//!   pattern was not found, never an error.
//! - **Mandatory field**: one of the eight [`MandatoryField`] identifiers
//!   whose absence forces manual review.
//! - **Routing result**: [`RoutingResult`], the queue a claim is assigned to,
//!   with reasoning, confidence and flags.
//! - **Claim record**: [`ClaimRecord`], the serializable summary of one run.
//!
//! ## Architecture
//!
//! ```text
//! text → extractor → ExtractedFieldTree → gatekeeper → Vec<MandatoryField>
//!                                      ↘                ↙
//!                                        routing engine → RoutingResult
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod fields;
pub mod mandatory;
pub mod money;
pub mod record;
pub mod routing;

// Re-exports for convenience
pub use fields::{
    AssetDetails, ContactDetails, EffectiveDates, ExtractedFieldTree, IncidentInformation,
    InvolvedParties, OtherMandatoryFields, PolicyInformation,
};
pub use mandatory::MandatoryField;
pub use money::{format_currency, format_threshold};
pub use record::ClaimRecord;
pub use routing::{Route, RoutingFlag, RoutingResult};

pub use rust_decimal::Decimal;
