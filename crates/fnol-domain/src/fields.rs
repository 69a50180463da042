//! Field tree module - the structured result of reading one FNOL document

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Policy effective period
///
/// Only built when at least one of the two dates was found; a document with
/// no effective dates has no `EffectiveDates` at all rather than an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveDates {
    /// Start of cover
    pub start: Option<String>,
    /// End of cover
    pub end: Option<String>,
}

/// Policy-related information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyInformation {
    /// Policy number (alphanumeric/hyphen token)
    pub policy_number: Option<String>,
    /// Name of the policyholder
    pub policyholder_name: Option<String>,
    /// Effective period of the policy
    pub effective_dates: Option<EffectiveDates>,
}

/// Incident details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentInformation {
    /// Incident date as written in the document
    pub date: Option<String>,
    /// Incident time as written in the document
    pub time: Option<String>,
    /// Free-text location
    pub location: Option<String>,
    /// Narrative description, collapsed to a single line
    pub description: Option<String>,
}

/// Contact information for the claimant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    /// Phone number
    pub phone: Option<String>,
    /// Email address
    pub email: Option<String>,
}

/// Parties involved in the incident
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvolvedParties {
    /// Claimant name
    pub claimant: Option<String>,
    /// Third-party names; never an empty list
    pub third_parties: Option<Vec<String>>,
    /// Present only if a phone or an email was found
    pub contact_details: Option<ContactDetails>,
}

/// Details about the damaged asset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDetails {
    /// Asset type (vehicle, property, ...)
    pub asset_type: Option<String>,
    /// VIN, serial number or other asset identifier
    pub asset_id: Option<String>,
    /// Asset-level damage estimate
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub estimated_damage: Option<Decimal>,
}

/// Remaining claim-level fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherMandatoryFields {
    /// Claim type (auto, property, bodily injury, ...)
    pub claim_type: Option<String>,
    /// Attachment names; never an empty list
    pub attachments: Option<Vec<String>>,
    /// Claim-level initial estimate
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub initial_estimate: Option<Decimal>,
}

/// All fields extracted from one FNOL document
///
/// Built once per document and never mutated afterwards. A `None`
/// sub-record reads exactly like a sub-record whose leaves are all `None`;
/// the accessors below flatten both cases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFieldTree {
    /// Policy section
    pub policy_information: Option<PolicyInformation>,
    /// Incident section
    pub incident_information: Option<IncidentInformation>,
    /// Parties section
    pub involved_parties: Option<InvolvedParties>,
    /// Asset section
    pub asset_details: Option<AssetDetails>,
    /// Claim-level section
    pub other_mandatory_fields: Option<OtherMandatoryFields>,
}

impl ExtractedFieldTree {
    /// Policy number, if extracted
    pub fn policy_number(&self) -> Option<&str> {
        self.policy_information.as_ref()?.policy_number.as_deref()
    }

    /// Policyholder name, if extracted
    pub fn policyholder_name(&self) -> Option<&str> {
        self.policy_information.as_ref()?.policyholder_name.as_deref()
    }

    /// Incident date, if extracted
    pub fn incident_date(&self) -> Option<&str> {
        self.incident_information.as_ref()?.date.as_deref()
    }

    /// Incident location, if extracted
    pub fn incident_location(&self) -> Option<&str> {
        self.incident_information.as_ref()?.location.as_deref()
    }

    /// Incident description, if extracted
    pub fn incident_description(&self) -> Option<&str> {
        self.incident_information.as_ref()?.description.as_deref()
    }

    /// Claimant name, if extracted
    pub fn claimant(&self) -> Option<&str> {
        self.involved_parties.as_ref()?.claimant.as_deref()
    }

    /// Claim type, if extracted
    pub fn claim_type(&self) -> Option<&str> {
        self.other_mandatory_fields.as_ref()?.claim_type.as_deref()
    }

    /// Asset-level estimated damage, if extracted
    pub fn estimated_damage(&self) -> Option<Decimal> {
        self.asset_details.as_ref()?.estimated_damage
    }

    /// Claim-level initial estimate, if extracted
    pub fn initial_estimate(&self) -> Option<Decimal> {
        self.other_mandatory_fields.as_ref()?.initial_estimate
    }

    /// Damage amount used for threshold decisions
    ///
    /// Prefers the asset-level estimate and falls back to the initial
    /// estimate.
    pub fn resolved_damage(&self) -> Option<Decimal> {
        self.estimated_damage().or_else(|| self.initial_estimate())
    }

    /// Number of leaf fields in a fully populated tree
    pub const LEAF_COUNT: usize = 18;

    /// Number of leaf fields that hold a value
    pub fn present_leaf_count(&self) -> usize {
        let mut leaves: Vec<bool> = Vec::with_capacity(Self::LEAF_COUNT);

        if let Some(policy) = &self.policy_information {
            let dates = policy.effective_dates.as_ref();
            leaves.extend([
                policy.policy_number.is_some(),
                policy.policyholder_name.is_some(),
                dates.is_some_and(|d| d.start.is_some()),
                dates.is_some_and(|d| d.end.is_some()),
            ]);
        }
        if let Some(incident) = &self.incident_information {
            leaves.extend([
                incident.date.is_some(),
                incident.time.is_some(),
                incident.location.is_some(),
                incident.description.is_some(),
            ]);
        }
        if let Some(parties) = &self.involved_parties {
            let contact = parties.contact_details.as_ref();
            leaves.extend([
                parties.claimant.is_some(),
                parties.third_parties.is_some(),
                contact.is_some_and(|c| c.phone.is_some()),
                contact.is_some_and(|c| c.email.is_some()),
            ]);
        }
        if let Some(asset) = &self.asset_details {
            leaves.extend([
                asset.asset_type.is_some(),
                asset.asset_id.is_some(),
                asset.estimated_damage.is_some(),
            ]);
        }
        if let Some(other) = &self.other_mandatory_fields {
            leaves.extend([
                other.claim_type.is_some(),
                other.attachments.is_some(),
                other.initial_estimate.is_some(),
            ]);
        }

        leaves.into_iter().filter(|present| *present).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tree_with_amounts(estimated: Option<Decimal>, initial: Option<Decimal>) -> ExtractedFieldTree {
        ExtractedFieldTree {
            asset_details: Some(AssetDetails {
                estimated_damage: estimated,
                ..Default::default()
            }),
            other_mandatory_fields: Some(OtherMandatoryFields {
                initial_estimate: initial,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_tree_accessors() {
        let tree = ExtractedFieldTree::default();
        assert!(tree.policy_number().is_none());
        assert!(tree.incident_description().is_none());
        assert!(tree.claim_type().is_none());
        assert!(tree.resolved_damage().is_none());
    }

    #[test]
    fn test_resolved_damage_prefers_asset_estimate() {
        let tree = tree_with_amounts(Some(dec!(1200)), Some(dec!(99000)));
        assert_eq!(tree.resolved_damage(), Some(dec!(1200)));
    }

    #[test]
    fn test_resolved_damage_falls_back_to_initial_estimate() {
        let tree = tree_with_amounts(None, Some(dec!(4500.50)));
        assert_eq!(tree.resolved_damage(), Some(dec!(4500.50)));
    }

    #[test]
    fn test_present_leaf_count() {
        assert_eq!(ExtractedFieldTree::default().present_leaf_count(), 0);

        let mut tree = tree_with_amounts(Some(dec!(1)), None);
        assert_eq!(tree.present_leaf_count(), 1);

        tree.involved_parties = Some(InvolvedParties {
            claimant: Some("Jane Roe".to_string()),
            contact_details: Some(ContactDetails {
                phone: Some("555-0100".to_string()),
                email: None,
            }),
            ..Default::default()
        });
        assert_eq!(tree.present_leaf_count(), 3);
    }

    #[test]
    fn test_json_uses_camel_case_and_explicit_nulls() {
        let tree = ExtractedFieldTree {
            policy_information: Some(PolicyInformation {
                policy_number: Some("POL-1".to_string()),
                ..Default::default()
            }),
            asset_details: Some(AssetDetails {
                estimated_damage: Some(dec!(15000)),
                ..Default::default()
            }),
            ..Default::default()
        };

        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["policyInformation"]["policyNumber"], "POL-1");
        assert!(json["policyInformation"]["policyholderName"].is_null());
        assert!(json["incidentInformation"].is_null());
        assert_eq!(json["assetDetails"]["estimatedDamage"], 15000.0);
    }

    #[test]
    fn test_json_missing_amount_reads_as_absent() {
        let json = r#"{"assetDetails": {"assetType": "vehicle"}}"#;
        let tree: ExtractedFieldTree = serde_json::from_str(json).unwrap();
        let asset = tree.asset_details.unwrap();
        assert_eq!(asset.asset_type.as_deref(), Some("vehicle"));
        assert!(asset.estimated_damage.is_none());
    }
}
