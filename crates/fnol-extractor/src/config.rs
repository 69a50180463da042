//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Configuration for the field pattern extractor
///
/// The patterns themselves are fixed; configuration only tunes the
/// normalization applied to what they capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// List entries that mean "nothing" and are dropped after splitting
    /// (compared case-insensitively)
    pub list_sentinels: Vec<String>,

    /// Minimum length of a phone capture (characters, after trimming)
    pub min_phone_length: usize,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_phone_length == 0 {
            return Err("min_phone_length must be greater than 0".to_string());
        }
        if self.list_sentinels.iter().any(|s| s.trim().is_empty()) {
            return Err("list_sentinels cannot contain empty entries".to_string());
        }
        Ok(())
    }

    /// Check whether a list entry is a sentinel such as "none" or "N/A"
    pub fn is_sentinel(&self, entry: &str) -> bool {
        let entry = entry.trim();
        self.list_sentinels
            .iter()
            .any(|sentinel| sentinel.trim().eq_ignore_ascii_case(entry))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            list_sentinels: vec!["none".to_string(), "n/a".to_string()],
            min_phone_length: 7,
        }
    }
}

impl ExtractorConfig {
    /// Strict preset: longer phone numbers, broader sentinel vocabulary
    pub fn strict() -> Self {
        Self {
            list_sentinels: ["none", "n/a", "na", "nil", "unknown"]
                .into_iter()
                .map(String::from)
                .collect(),
            min_phone_length: 10,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.min_phone_length, 7);
    }

    #[test]
    fn test_strict_config_is_valid() {
        let config = ExtractorConfig::strict();
        assert!(config.validate().is_ok());
        assert!(config.is_sentinel("Unknown"));
    }

    #[test]
    fn test_invalid_phone_length() {
        let mut config = ExtractorConfig::default();
        config.min_phone_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_sentinel_rejected() {
        let mut config = ExtractorConfig::default();
        config.list_sentinels.push("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sentinel_matching_ignores_case() {
        let config = ExtractorConfig::default();
        assert!(config.is_sentinel("None"));
        assert!(config.is_sentinel(" N/A "));
        assert!(!config.is_sentinel("Nona Smith"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ExtractorConfig::from_toml("min_phone_length = 9").unwrap();
        assert_eq!(config.min_phone_length, 9);
        assert_eq!(config.list_sentinels, ExtractorConfig::default().list_sentinels);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::strict();
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }
}
