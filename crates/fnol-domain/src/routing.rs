//! Routing module - queues, flags and the routing decision

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handling queue a claim is assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// Mandatory information is missing
    #[serde(rename = "Manual Review")]
    ManualReview,

    /// Description contains fraud indicators
    #[serde(rename = "Investigation Flag")]
    InvestigationFlag,

    /// Injury claims handled by medical specialists
    #[serde(rename = "Specialist Queue")]
    SpecialistQueue,

    /// Low-value claims that bypass full review
    #[serde(rename = "Fast-track")]
    FastTrack,

    /// Everything else
    #[serde(rename = "Standard Processing")]
    StandardProcessing,
}

impl Route {
    /// Get the display name of the route
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::ManualReview => "Manual Review",
            Route::InvestigationFlag => "Investigation Flag",
            Route::SpecialistQueue => "Specialist Queue",
            Route::FastTrack => "Fast-track",
            Route::StandardProcessing => "Standard Processing",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorical flag attached to a routing decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingFlag {
    /// One or more mandatory fields are absent
    MissingFields,
    /// At least one fraud keyword matched
    FraudIndicator,
    /// Claim type indicates injury
    InjuryClaim,
    /// Resolved damage is below the fast-track threshold
    LowValue,
    /// No special condition applied
    Standard,
}

impl RoutingFlag {
    /// Get the flag name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingFlag::MissingFields => "missing_fields",
            RoutingFlag::FraudIndicator => "fraud_indicator",
            RoutingFlag::InjuryClaim => "injury_claim",
            RoutingFlag::LowValue => "low_value",
            RoutingFlag::Standard => "standard",
        }
    }
}

impl fmt::Display for RoutingFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Routing decision with its justification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingResult {
    /// Destination queue
    pub route: Route,

    /// Human-readable justification embedding the values that decided it
    pub reasoning: String,

    /// Confidence in the decision [0.0, 1.0]
    pub confidence: f64,

    /// Categorical flags
    pub flags: Vec<RoutingFlag>,
}

impl RoutingResult {
    /// Create a result carrying a single flag
    pub fn new(route: Route, reasoning: impl Into<String>, confidence: f64, flag: RoutingFlag) -> Self {
        Self {
            route,
            reasoning: reasoning.into(),
            confidence,
            flags: vec![flag],
        }
    }

    /// Check whether the decision carries a flag
    pub fn has_flag(&self, flag: RoutingFlag) -> bool {
        self.flags.contains(&flag)
    }
}
