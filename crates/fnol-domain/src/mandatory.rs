//! Mandatory field identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// A field whose absence forces a claim into manual review
///
/// Identifiers serialize as the camelCase names used in claim records
/// (`policyNumber`, `incidentDescription`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MandatoryField {
    /// `policyInformation.policyNumber`
    PolicyNumber,
    /// `policyInformation.policyholderName`
    PolicyholderName,
    /// `incidentInformation.date`
    IncidentDate,
    /// `incidentInformation.location`
    IncidentLocation,
    /// `incidentInformation.description`
    IncidentDescription,
    /// `involvedParties.claimant`
    Claimant,
    /// `otherMandatoryFields.claimType`
    ClaimType,
    /// `assetDetails.estimatedDamage`
    EstimatedDamage,
}

impl MandatoryField {
    /// All mandatory fields in canonical order
    ///
    /// Missing fields are checked and reported in exactly this order so that
    /// reasoning text is reproducible.
    pub const CANONICAL: [MandatoryField; 8] = [
        MandatoryField::PolicyNumber,
        MandatoryField::PolicyholderName,
        MandatoryField::IncidentDate,
        MandatoryField::IncidentLocation,
        MandatoryField::IncidentDescription,
        MandatoryField::Claimant,
        MandatoryField::ClaimType,
        MandatoryField::EstimatedDamage,
    ];

    /// Get the field identifier as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            MandatoryField::PolicyNumber => "policyNumber",
            MandatoryField::PolicyholderName => "policyholderName",
            MandatoryField::IncidentDate => "incidentDate",
            MandatoryField::IncidentLocation => "incidentLocation",
            MandatoryField::IncidentDescription => "incidentDescription",
            MandatoryField::Claimant => "claimant",
            MandatoryField::ClaimType => "claimType",
            MandatoryField::EstimatedDamage => "estimatedDamage",
        }
    }

    /// Parse a field identifier (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        Self::CANONICAL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Position of this field in the canonical order
    pub fn canonical_index(&self) -> usize {
        Self::CANONICAL
            .iter()
            .position(|field| field == self)
            .unwrap_or(Self::CANONICAL.len())
    }
}

impl fmt::Display for MandatoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MandatoryField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid mandatory field: {}", s))
    }
}
