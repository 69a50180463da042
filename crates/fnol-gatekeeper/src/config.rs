//! Gatekeeper configuration

use fnol_domain::MandatoryField;
use serde::{Deserialize, Serialize};

/// Configuration for mandatory-field checking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Fields that must be present, in reporting order
    pub mandatory_fields: Vec<MandatoryField>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            mandatory_fields: MandatoryField::CANONICAL.to_vec(),
        }
    }
}

impl ValidationConfig {
    /// Create a lenient configuration (identification fields only)
    pub fn lenient() -> Self {
        Self {
            mandatory_fields: vec![
                MandatoryField::PolicyNumber,
                MandatoryField::IncidentDate,
                MandatoryField::ClaimType,
            ],
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.mandatory_fields.is_empty() {
            return Err("mandatory_fields cannot be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
