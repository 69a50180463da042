//! Mandatory-field checking

use crate::{GatekeeperError, ValidationConfig};
use fnol_domain::{ExtractedFieldTree, MandatoryField};
use tracing::{debug, info};

/// Result of checking one field tree
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Whether every mandatory field was found
    pub status: ValidationStatus,

    /// Missing fields in canonical order
    pub missing_fields: Vec<MandatoryField>,

    /// Share of mandatory fields present (0.0-1.0)
    pub completeness: f64,
}

/// Validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// All mandatory fields present
    Complete,

    /// At least one mandatory field missing
    Incomplete,
}

/// The Gatekeeper reports which mandatory fields a field tree lacks
#[derive(Debug, Clone, Default)]
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper after validating its configuration
    pub fn try_new(config: ValidationConfig) -> Result<Self, GatekeeperError> {
        config.validate().map_err(GatekeeperError::Config)?;
        Ok(Self::new(config))
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// List the mandatory fields absent from a tree
    ///
    /// Fields are reported in canonical order whatever order the
    /// configuration lists them in; a field listed twice is reported once. A field counts as absent when its leaf or any enclosing
    /// sub-record is absent.
    pub fn identify_missing_fields(&self, tree: &ExtractedFieldTree) -> Vec<MandatoryField> {
        let mut missing: Vec<MandatoryField> = Vec::new();

        for field in &self.config.mandatory_fields {
            if missing.contains(field) || is_present(tree, *field) {
                continue;
            }
            debug!("Mandatory field missing: {}", field);
            missing.push(*field);
        }

        missing.sort_by_key(MandatoryField::canonical_index);
        missing
    }

    /// Check a tree and summarize its completeness
    pub fn validate(&self, tree: &ExtractedFieldTree) -> ValidationResult {
        let missing_fields = self.identify_missing_fields(tree);

        let mut required = self.config.mandatory_fields.clone();
        required.sort_by_key(MandatoryField::canonical_index);
        required.dedup();

        let completeness = if required.is_empty() {
            1.0
        } else {
            (required.len() - missing_fields.len()) as f64 / required.len() as f64
        };

        let status = if missing_fields.is_empty() {
            ValidationStatus::Complete
        } else {
            ValidationStatus::Incomplete
        };

        info!(
            "Validation complete: {} of {} mandatory fields missing",
            missing_fields.len(),
            required.len()
        );

        ValidationResult {
            status,
            missing_fields,
            completeness,
        }
    }
}

fn is_present(tree: &ExtractedFieldTree, field: MandatoryField) -> bool {
    match field {
        MandatoryField::PolicyNumber => tree.policy_number().is_some(),
        MandatoryField::PolicyholderName => tree.policyholder_name().is_some(),
        MandatoryField::IncidentDate => tree.incident_date().is_some(),
        MandatoryField::IncidentLocation => tree.incident_location().is_some(),
        MandatoryField::IncidentDescription => tree.incident_description().is_some(),
        MandatoryField::Claimant => tree.claimant().is_some(),
        MandatoryField::ClaimType => tree.claim_type().is_some(),
        MandatoryField::EstimatedDamage => tree.estimated_damage().is_some(),
    }
}
