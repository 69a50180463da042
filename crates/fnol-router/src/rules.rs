//! Routing rules
//!
//! Each rule either claims a field tree (returning a decision) or passes.
//! The engine asks them in priority order and stops at the first decision;
//! [`StandardProcessingRule`] sits outside the chain and always decides.

use crate::config::RoutingConfig;
use fnol_domain::{
    format_currency, format_threshold, ExtractedFieldTree, MandatoryField, Route, RoutingFlag,
    RoutingResult,
};
use rust_decimal::Decimal;
use std::fmt;

/// One link of the routing chain
pub trait RoutingRule: fmt::Debug + Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Decide the route, or `None` to defer to the next rule
    fn apply(&self, tree: &ExtractedFieldTree, missing: &[MandatoryField]) -> Option<RoutingResult>;
}

/// Any missing mandatory field forces manual review
#[derive(Debug, Clone, Default)]
pub struct MissingFieldsRule;

impl RoutingRule for MissingFieldsRule {
    fn name(&self) -> &'static str {
        "missing_fields"
    }

    fn apply(&self, _tree: &ExtractedFieldTree, missing: &[MandatoryField]) -> Option<RoutingResult> {
        if missing.is_empty() {
            return None;
        }

        let names: Vec<&str> = missing.iter().map(MandatoryField::as_str).collect();
        let reasoning = format!(
            "Missing mandatory fields: {}. Claim requires manual review to complete information.",
            names.join(", ")
        );

        Some(RoutingResult::new(
            Route::ManualReview,
            reasoning,
            1.0,
            RoutingFlag::MissingFields,
        ))
    }
}

/// Fraud keywords in the incident description trigger investigation
#[derive(Debug, Clone)]
pub struct FraudRule {
    keywords: Vec<String>,
    confidence: f64,
}

impl FraudRule {
    /// Create a rule matching the given keywords (case-insensitive)
    pub fn new(keywords: &[String], confidence: f64) -> Self {
        Self {
            keywords: lowercase_unique(keywords),
            confidence,
        }
    }

    /// Keywords found in a description, in configured order
    pub fn matched_keywords(&self, description: &str) -> Vec<&str> {
        let description = description.to_lowercase();
        self.keywords
            .iter()
            .filter(|keyword| description.contains(keyword.as_str()))
            .map(String::as_str)
            .collect()
    }
}

impl RoutingRule for FraudRule {
    fn name(&self) -> &'static str {
        "fraud_indicator"
    }

    fn apply(&self, tree: &ExtractedFieldTree, _missing: &[MandatoryField]) -> Option<RoutingResult> {
        let description = tree.incident_description()?;
        let matched = self.matched_keywords(description);
        if matched.is_empty() {
            return None;
        }

        let reasoning = format!(
            "Potential fraud indicators detected: {}. Claim flagged for investigation. \
             Incident description contains suspicious language.",
            matched.join(", ")
        );

        Some(RoutingResult::new(
            Route::InvestigationFlag,
            reasoning,
            self.confidence,
            RoutingFlag::FraudIndicator,
        ))
    }
}

/// Injury claim types go to the specialist queue
#[derive(Debug, Clone)]
pub struct InjuryRule {
    keywords: Vec<String>,
}

impl InjuryRule {
    /// Create a rule matching the given claim type keywords (case-insensitive)
    pub fn new(keywords: &[String]) -> Self {
        Self {
            keywords: lowercase_unique(keywords),
        }
    }

    /// Whether a claim type names an injury
    pub fn is_injury(&self, claim_type: &str) -> bool {
        let claim_type = claim_type.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| claim_type.contains(keyword.as_str()))
    }
}

impl RoutingRule for InjuryRule {
    fn name(&self) -> &'static str {
        "injury_claim"
    }

    fn apply(&self, tree: &ExtractedFieldTree, _missing: &[MandatoryField]) -> Option<RoutingResult> {
        let claim_type = tree.claim_type()?;
        if !self.is_injury(claim_type) {
            return None;
        }

        let reasoning = format!(
            "Claim type '{}' indicates an injury claim. \
             Routing to specialist queue for medical review and assessment.",
            claim_type
        );

        Some(RoutingResult::new(
            Route::SpecialistQueue,
            reasoning,
            1.0,
            RoutingFlag::InjuryClaim,
        ))
    }
}

/// Resolved damage strictly below the threshold is fast-tracked
#[derive(Debug, Clone)]
pub struct FastTrackRule {
    threshold: Decimal,
}

impl FastTrackRule {
    /// Create a rule with the given threshold
    pub fn new(threshold: Decimal) -> Self {
        Self { threshold }
    }
}

impl RoutingRule for FastTrackRule {
    fn name(&self) -> &'static str {
        "low_value"
    }

    fn apply(&self, tree: &ExtractedFieldTree, _missing: &[MandatoryField]) -> Option<RoutingResult> {
        let damage = tree.resolved_damage()?;
        if damage >= self.threshold {
            return None;
        }

        let reasoning = format!(
            "Estimated damage ({}) is below {} threshold. All mandatory fields present. \
             No fraud indicators detected. Eligible for fast-track processing.",
            format_currency(damage),
            format_threshold(self.threshold)
        );

        Some(RoutingResult::new(
            Route::FastTrack,
            reasoning,
            1.0,
            RoutingFlag::LowValue,
        ))
    }
}

/// Catch-all at the end of the chain
///
/// Not a [`RoutingRule`]: it cannot pass, so the engine always ends with a
/// decision.
#[derive(Debug, Clone)]
pub struct StandardProcessingRule {
    threshold: Decimal,
}

impl StandardProcessingRule {
    /// Create the terminal rule; the threshold only feeds the reasoning text
    pub fn new(threshold: Decimal) -> Self {
        Self { threshold }
    }

    /// Standard processing decision for a tree no other rule claimed
    pub fn decide(&self, tree: &ExtractedFieldTree) -> RoutingResult {
        let reasoning = match tree.resolved_damage() {
            Some(damage) => format!(
                "Estimated damage ({}) meets or exceeds {} fast-track threshold. \
                 Routing to standard processing workflow for full assessment.",
                format_currency(damage),
                format_threshold(self.threshold)
            ),
            None => "All mandatory fields present. No special conditions detected. \
                     Routing to standard processing workflow."
                .to_string(),
        };

        RoutingResult::new(Route::StandardProcessing, reasoning, 1.0, RoutingFlag::Standard)
    }
}

/// Default rule chain in priority order
pub fn default_rules(config: &RoutingConfig) -> Vec<Box<dyn RoutingRule>> {
    vec![
        Box::new(MissingFieldsRule),
        Box::new(FraudRule::new(&config.fraud_keywords, config.fraud_confidence)),
        Box::new(InjuryRule::new(&config.injury_keywords)),
        Box::new(FastTrackRule::new(config.fast_track_threshold)),
    ]
}

fn lowercase_unique(keywords: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(keywords.len());
    for keyword in keywords {
        let keyword = keyword.trim().to_lowercase();
        if !keyword.is_empty() && !unique.contains(&keyword) {
            unique.push(keyword);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnol_domain::{AssetDetails, IncidentInformation, OtherMandatoryFields};
    use rust_decimal_macros::dec;

    fn tree(description: Option<&str>, claim_type: Option<&str>, damage: Option<Decimal>) -> ExtractedFieldTree {
        ExtractedFieldTree {
            incident_information: Some(IncidentInformation {
                description: description.map(String::from),
                ..Default::default()
            }),
            other_mandatory_fields: Some(OtherMandatoryFields {
                claim_type: claim_type.map(String::from),
                ..Default::default()
            }),
            asset_details: Some(AssetDetails {
                estimated_damage: damage,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_fields_reasoning_lists_names() {
        let result = MissingFieldsRule
            .apply(
                &ExtractedFieldTree::default(),
                &[MandatoryField::PolicyNumber, MandatoryField::Claimant],
            )
            .unwrap();

        assert_eq!(result.route, Route::ManualReview);
        assert_eq!(
            result.reasoning,
            "Missing mandatory fields: policyNumber, claimant. Claim requires manual review to complete information."
        );
    }

    #[test]
    fn test_missing_fields_rule_passes_on_empty_list() {
        assert!(MissingFieldsRule.apply(&ExtractedFieldTree::default(), &[]).is_none());
    }

    #[test]
    fn test_fraud_keywords_in_configured_order() {
        let rule = FraudRule::new(&RoutingConfig::default().fraud_keywords, 0.8);
        let result = rule
            .apply(&tree(Some("A FAKE, staged collision"), None, None), &[])
            .unwrap();

        assert_eq!(result.route, Route::InvestigationFlag);
        assert_eq!(result.confidence, 0.8);
        assert!(result.reasoning.starts_with("Potential fraud indicators detected: staged, fake."));
    }

    #[test]
    fn test_fraud_substring_match() {
        let rule = FraudRule::new(&RoutingConfig::default().fraud_keywords, 0.8);
        assert_eq!(rule.matched_keywords("fraudulent claim"), vec!["fraud", "fraudulent"]);
        assert!(rule.matched_keywords("routine fender bender").is_empty());
    }

    #[test]
    fn test_fraud_rule_needs_description() {
        let rule = FraudRule::new(&RoutingConfig::default().fraud_keywords, 0.8);
        assert!(rule.apply(&tree(None, Some("fake"), None), &[]).is_none());
    }

    #[test]
    fn test_injury_rule() {
        let rule = InjuryRule::new(&RoutingConfig::default().injury_keywords);
        let result = rule.apply(&tree(None, Some("Bodily Injury"), None), &[]).unwrap();

        assert_eq!(result.route, Route::SpecialistQueue);
        assert_eq!(
            result.reasoning,
            "Claim type 'Bodily Injury' indicates an injury claim. Routing to specialist queue for medical review and assessment."
        );
        assert!(rule.apply(&tree(None, Some("auto"), None), &[]).is_none());
    }

    #[test]
    fn test_fast_track_boundary() {
        let rule = FastTrackRule::new(dec!(25000));
        assert!(rule.apply(&tree(None, None, Some(dec!(25000))), &[]).is_none());

        let result = rule.apply(&tree(None, None, Some(dec!(24999.99))), &[]).unwrap();
        assert_eq!(result.route, Route::FastTrack);
        assert_eq!(
            result.reasoning,
            "Estimated damage ($24,999.99) is below $25,000 threshold. All mandatory fields present. \
             No fraud indicators detected. Eligible for fast-track processing."
        );
    }

    #[test]
    fn test_fast_track_uses_initial_estimate_fallback() {
        let mut claim = tree(None, None, None);
        claim.other_mandatory_fields = Some(OtherMandatoryFields {
            initial_estimate: Some(dec!(3000)),
            ..Default::default()
        });
        assert!(FastTrackRule::new(dec!(25000)).apply(&claim, &[]).is_some());
    }

    #[test]
    fn test_fast_track_passes_without_amount() {
        assert!(FastTrackRule::new(dec!(25000)).apply(&tree(None, None, None), &[]).is_none());
    }

    #[test]
    fn test_standard_reasoning_variants() {
        let rule = StandardProcessingRule::new(dec!(25000));

        let with_amount = rule.decide(&tree(None, None, Some(dec!(50000))));
        assert_eq!(with_amount.route, Route::StandardProcessing);
        assert!(with_amount.reasoning.contains("($50,000.00) meets or exceeds $25,000"));

        let without_amount = rule.decide(&tree(None, None, None));
        assert_eq!(
            without_amount.reasoning,
            "All mandatory fields present. No special conditions detected. Routing to standard processing workflow."
        );
        assert!(without_amount.has_flag(RoutingFlag::Standard));
    }

    #[test]
    fn test_keywords_are_normalized() {
        let rule = FraudRule::new(&["Staged".to_string(), "staged ".to_string()], 0.5);
        assert_eq!(rule.matched_keywords("STAGED accident"), vec!["staged"]);
    }
}
