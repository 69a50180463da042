//! Claim record - the serializable outcome of processing one document

use crate::fields::ExtractedFieldTree;
use crate::mandatory::MandatoryField;
use crate::routing::{Route, RoutingFlag, RoutingResult};
use serde::{Deserialize, Serialize};

/// Everything produced for one FNOL document
///
/// Carries no identity beyond the request that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRecord {
    /// Extracted field tree
    pub extracted_fields: ExtractedFieldTree,

    /// Missing mandatory fields in canonical order
    pub missing_fields: Vec<MandatoryField>,

    /// Destination queue
    pub recommended_route: Route,

    /// Justification for the route
    pub reasoning: String,

    /// Confidence in the routing decision
    pub confidence: f64,

    /// Routing flags
    pub flags: Vec<RoutingFlag>,
}

impl ClaimRecord {
    /// Assemble a record from the outputs of the three pipeline stages
    pub fn new(
        extracted_fields: ExtractedFieldTree,
        missing_fields: Vec<MandatoryField>,
        routing: RoutingResult,
    ) -> Self {
        Self {
            extracted_fields,
            missing_fields,
            recommended_route: routing.route,
            reasoning: routing.reasoning,
            confidence: routing.confidence,
            flags: routing.flags,
        }
    }

    /// Whether every mandatory field was found
    pub fn is_complete(&self) -> bool {
        self.missing_fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_json_shape() {
        let routing = RoutingResult::new(
            Route::ManualReview,
            "Missing mandatory fields: claimant.",
            1.0,
            RoutingFlag::MissingFields,
        );
        let record = ClaimRecord::new(
            ExtractedFieldTree::default(),
            vec![MandatoryField::Claimant],
            routing,
        );

        assert!(!record.is_complete());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["recommendedRoute"], "Manual Review");
        assert_eq!(json["missingFields"][0], "claimant");
        assert_eq!(json["flags"][0], "missing_fields");
        assert!(json["extractedFields"]["policyInformation"].is_null());
    }
}
