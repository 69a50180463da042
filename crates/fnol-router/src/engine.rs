//! Priority-ordered routing engine

use crate::config::RoutingConfig;
use crate::rules::{default_rules, RoutingRule, StandardProcessingRule};
use crate::RouterError;
use fnol_domain::{ExtractedFieldTree, MandatoryField, RoutingResult};
use tracing::{debug, info};

/// Evaluates the routing chain, first match wins
#[derive(Debug)]
pub struct RoutingEngine {
    config: RoutingConfig,
    rules: Vec<Box<dyn RoutingRule>>,
    fallback: StandardProcessingRule,
}

impl RoutingEngine {
    /// Create an engine running the standard chain under `config`
    pub fn new(config: RoutingConfig) -> Self {
        let rules = default_rules(&config);
        Self::with_rules(config, rules)
    }

    /// Create an engine after validating its configuration
    pub fn try_new(config: RoutingConfig) -> Result<Self, RouterError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create an engine with default configuration
    pub fn default_config() -> Self {
        Self::new(RoutingConfig::default())
    }

    /// Create an engine with a custom chain
    ///
    /// Rules run in the given order. Standard processing always follows the
    /// last one.
    pub fn with_rules(config: RoutingConfig, rules: Vec<Box<dyn RoutingRule>>) -> Self {
        let fallback = StandardProcessingRule::new(config.fast_track_threshold);
        Self {
            config,
            rules,
            fallback,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Names of the chained rules in evaluation order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Decide the route for a claim
    ///
    /// Never fails: when no rule applies the claim goes to standard
    /// processing.
    pub fn route(&self, tree: &ExtractedFieldTree, missing: &[MandatoryField]) -> RoutingResult {
        for rule in &self.rules {
            if let Some(result) = rule.apply(tree, missing) {
                info!("Routed to {} by rule {}", result.route, rule.name());
                return result;
            }
            debug!("Rule {} did not apply", rule.name());
        }

        let result = self.fallback.decide(tree);
        info!("Routed to {} by fallback", result.route);
        result
    }
}

impl Default for RoutingEngine {
    fn default() -> Self {
        Self::default_config()
    }
}
