//! Configuration for the routing engine.
//!
//! Threshold, keyword sets and the fraud confidence are policy data: changing
//! them never requires touching the rule chain itself. Loaded from TOML files
//! or built from presets.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Routing configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("Failed to serialize config TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Value out of range or otherwise unusable
    #[error("Invalid routing configuration: {0}")]
    Invalid(String),
}

/// Routing policy loaded from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Resolved damage strictly below this amount is fast-tracked
    pub fast_track_threshold: Decimal,

    /// Substrings of the incident description that trigger investigation
    pub fraud_keywords: Vec<String>,

    /// Substrings of the claim type that mark an injury claim
    pub injury_keywords: Vec<String>,

    /// Confidence reported for investigation decisions
    pub fraud_confidence: f64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            fast_track_threshold: Decimal::new(25_000, 0),
            fraud_keywords: to_strings(&[
                "fraud",
                "fraudulent",
                "inconsistent",
                "staged",
                "suspicious",
                "fabricated",
                "false",
                "fake",
            ]),
            injury_keywords: to_strings(&["injury", "bodily", "medical"]),
            fraud_confidence: 0.8,
        }
    }
}

impl RoutingConfig {
    /// Conservative preset: lower fast-track ceiling, wider keyword nets
    pub fn conservative() -> Self {
        let mut config = Self::default();
        config.fast_track_threshold = Decimal::new(10_000, 0);
        config
            .fraud_keywords
            .extend(to_strings(&["exaggerated", "contradictory", "unverified"]));
        config
            .injury_keywords
            .extend(to_strings(&["hospital", "whiplash", "fatality"]));
        config
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: RoutingConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fast_track_threshold.is_sign_negative() {
            return Err(ConfigError::Invalid(
                "fast_track_threshold cannot be negative".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.fraud_confidence) {
            return Err(ConfigError::Invalid(
                "fraud_confidence must be between 0.0 and 1.0".to_string(),
            ));
        }
        check_keywords("fraud_keywords", &self.fraud_keywords)?;
        check_keywords("injury_keywords", &self.injury_keywords)?;
        Ok(())
    }
}

fn check_keywords(name: &str, keywords: &[String]) -> Result<(), ConfigError> {
    if keywords.is_empty() {
        return Err(ConfigError::Invalid(format!("{} cannot be empty", name)));
    }
    if keywords.iter().any(|k| k.trim().is_empty()) {
        return Err(ConfigError::Invalid(format!(
            "{} cannot contain blank entries",
            name
        )));
    }
    Ok(())
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
