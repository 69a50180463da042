//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::loader::load_document;
use crate::patterns::{
    ASSET_ID, ASSET_TYPE, ATTACHMENTS, CLAIMANT_NAME, CLAIM_TYPE, DESCRIPTION_LABEL, EFFECTIVE_RANGE,
    EMAIL, END_DATE, ESTIMATED_DAMAGE, INCIDENT_DATE, INCIDENT_TIME, INITIAL_ESTIMATE, LOCATION,
    PHONE, POLICYHOLDER_NAME, POLICY_NUMBER, START_DATE, THIRD_PARTIES,
};
use crate::text::{collapse_whitespace, looks_like_label, non_empty, parse_amount, split_list};
use fnol_domain::{
    AssetDetails, ContactDetails, EffectiveDates, ExtractedFieldTree, IncidentInformation,
    InvolvedParties, OtherMandatoryFields, PolicyInformation,
};
use regex::Regex;
use rust_decimal::Decimal;
use std::path::Path;
use tracing::{debug, info};

/// Extract fields with the default configuration
///
/// Shorthand for `FieldPatternExtractor::default_config().extract_fields(text)`.
pub fn extract_fields(text: &str) -> ExtractedFieldTree {
    FieldPatternExtractor::default_config().extract_fields(text)
}

/// The Extractor turns FNOL text into a structured field tree
///
/// Each field has its own label pattern, applied to the whole text; the
/// first match wins. Rules write disjoint fields, so their order does not
/// matter. Stateless apart from its configuration, so one instance can be
/// shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct FieldPatternExtractor {
    config: ExtractorConfig,
}

impl FieldPatternExtractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Create an Extractor after validating its configuration
    pub fn try_new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self::new(config))
    }

    /// Create an Extractor with default configuration
    pub fn default_config() -> Self {
        Self::new(ExtractorConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract all fields from document text
    ///
    /// Never fails: a field whose pattern does not match is simply absent.
    /// All five sections are always present in the result.
    pub fn extract_fields(&self, text: &str) -> ExtractedFieldTree {
        let tree = ExtractedFieldTree {
            policy_information: Some(self.extract_policy_information(text)),
            incident_information: Some(self.extract_incident_information(text)),
            involved_parties: Some(self.extract_involved_parties(text)),
            asset_details: Some(self.extract_asset_details(text)),
            other_mandatory_fields: Some(self.extract_other_mandatory_fields(text)),
        };

        info!(
            "Extraction complete: {} of {} fields matched in {} chars",
            tree.present_leaf_count(),
            ExtractedFieldTree::LEAF_COUNT,
            text.len()
        );

        tree
    }

    /// Load a document from disk and extract its fields
    pub fn extract_document(&self, path: impl AsRef<Path>) -> Result<ExtractedFieldTree, ExtractorError> {
        let text = load_document(path)?;
        Ok(self.extract_fields(&text))
    }

    fn extract_policy_information(&self, text: &str) -> PolicyInformation {
        PolicyInformation {
            policy_number: capture("policyNumber", &POLICY_NUMBER, text),
            policyholder_name: capture("policyholderName", &POLICYHOLDER_NAME, text),
            effective_dates: self.extract_effective_dates(text),
        }
    }

    /// Combined range first, then separately labeled start/end dates
    fn extract_effective_dates(&self, text: &str) -> Option<EffectiveDates> {
        if let Some(caps) = EFFECTIVE_RANGE.captures(text) {
            return Some(EffectiveDates {
                start: caps.get(1).and_then(|m| non_empty(m.as_str())),
                end: caps.get(2).and_then(|m| non_empty(m.as_str())),
            });
        }

        let start = capture("effectiveDates.start", &START_DATE, text);
        let end = capture("effectiveDates.end", &END_DATE, text);

        if start.is_none() && end.is_none() {
            return None;
        }

        Some(EffectiveDates { start, end })
    }

    fn extract_incident_information(&self, text: &str) -> IncidentInformation {
        IncidentInformation {
            date: capture("incidentDate", &INCIDENT_DATE, text),
            time: capture("incidentTime", &INCIDENT_TIME, text),
            location: capture("incidentLocation", &LOCATION, text),
            description: self.extract_description(text),
        }
    }

    /// Read the description block that follows the label
    ///
    /// The block starts on the label's line (or the first non-blank line
    /// after it) and continues until a blank line or a line that opens a new
    /// `Label:` field.
    fn extract_description(&self, text: &str) -> Option<String> {
        let Some(label) = DESCRIPTION_LABEL.find(text) else {
            debug!("No match for incidentDescription");
            return None;
        };

        let mut lines = text[label.end()..].split('\n');
        let mut block: Vec<&str> = Vec::new();

        let head = lines.next().unwrap_or("").trim().trim_start_matches(':').trim();
        if head.is_empty() {
            let first = lines.by_ref().find(|line| !line.trim().is_empty())?;
            if looks_like_label(first) {
                debug!("Description label is followed by another field");
                return None;
            }
            block.push(first);
        } else {
            block.push(head);
        }

        for line in lines {
            if line.trim().is_empty() || looks_like_label(line) {
                break;
            }
            block.push(line);
        }

        non_empty(&collapse_whitespace(&block.join(" ")))
    }

    fn extract_involved_parties(&self, text: &str) -> InvolvedParties {
        let third_parties = capture("thirdParties", &THIRD_PARTIES, text)
            .and_then(|line| split_list(&line, &self.config));

        let phone = self.extract_phone(text);
        let email = capture("email", &EMAIL, text);
        let contact_details = if phone.is_some() || email.is_some() {
            Some(ContactDetails { phone, email })
        } else {
            None
        };

        InvolvedParties {
            claimant: capture("claimant", &CLAIMANT_NAME, text),
            third_parties,
            contact_details,
        }
    }

    /// First phone-like capture that is long enough to be a number
    fn extract_phone(&self, text: &str) -> Option<String> {
        PHONE
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim_end_matches(|c: char| matches!(c, '(' | '-' | '.' | ' ')))
            .filter_map(non_empty)
            .find(|phone| phone.chars().count() >= self.config.min_phone_length)
    }

    fn extract_asset_details(&self, text: &str) -> AssetDetails {
        AssetDetails {
            asset_type: capture("assetType", &ASSET_TYPE, text),
            asset_id: capture("assetId", &ASSET_ID, text),
            estimated_damage: capture_amount("estimatedDamage", &ESTIMATED_DAMAGE, text),
        }
    }

    fn extract_other_mandatory_fields(&self, text: &str) -> OtherMandatoryFields {
        OtherMandatoryFields {
            claim_type: capture("claimType", &CLAIM_TYPE, text),
            attachments: capture("attachments", &ATTACHMENTS, text)
                .and_then(|line| split_list(&line, &self.config)),
            initial_estimate: capture_amount("initialEstimate", &INITIAL_ESTIMATE, text),
        }
    }
}

/// Trimmed group 1 of the first match
fn capture(field: &str, pattern: &Regex, text: &str) -> Option<String> {
    let value = pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| non_empty(m.as_str()));

    if value.is_none() {
        debug!("No match for {}", field);
    }
    value
}

fn capture_amount(field: &str, pattern: &Regex, text: &str) -> Option<Decimal> {
    capture(field, pattern, text).and_then(|raw| parse_amount(&raw))
}
