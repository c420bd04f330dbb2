//! Configuration for the parser

use crate::error::KatzError;
use katz_domain::{Fact, Mapper};
use serde::{Deserialize, Serialize};

/// One mapping entry as written in TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperConfig {
    /// Identity descriptor (e.g. `domain.user.name`)
    pub source: String,

    /// Edge label (e.g. `has_password`)
    pub edge: String,

    /// Secret descriptor; its third dotted segment names the secret kind
    pub target: String,
}

impl From<&MapperConfig> for Mapper {
    fn from(config: &MapperConfig) -> Self {
        Mapper::new(&config.source, &config.edge, &config.target)
    }
}

/// A fact the invoking pipeline already used
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactConfig {
    /// Dotted descriptor
    #[serde(rename = "trait")]
    pub trait_name: String,

    /// Value
    pub value: String,
}

impl From<&FactConfig> for Fact {
    fn from(config: &FactConfig) -> Self {
        Fact::new(&config.trait_name, &config.value)
    }
}

/// Configuration for the parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Mapping entries, in emission order
    #[serde(default)]
    pub mappers: Vec<MapperConfig>,

    /// Facts already used by the caller
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub used_facts: Vec<FactConfig>,
}

impl ParserConfig {
    /// Domain mappers built from the configured entries
    pub fn mappers(&self) -> Vec<Mapper> {
        self.mappers.iter().map(Mapper::from).collect()
    }

    /// Domain facts built from the configured used facts
    pub fn used_facts(&self) -> Vec<Fact> {
        self.used_facts.iter().map(Fact::from).collect()
    }

    /// Validate the configuration
    ///
    /// Targets are not checked for a kind segment here; a short target is
    /// reported when projection reaches it.
    pub fn validate(&self) -> Result<(), String> {
        for (idx, mapper) in self.mappers.iter().enumerate() {
            if mapper.source.is_empty() {
                return Err(format!("mapper {}: source must not be empty", idx));
            }
            if mapper.edge.is_empty() {
                return Err(format!("mapper {}: edge must not be empty", idx));
            }
            if mapper.target.is_empty() {
                return Err(format!("mapper {}: target must not be empty", idx));
            }
        }
        for (idx, fact) in self.used_facts.iter().enumerate() {
            if fact.trait_name.is_empty() {
                return Err(format!("used fact {}: trait must not be empty", idx));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, KatzError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate().map_err(KatzError::Config)?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, KatzError> {
        toml::to_string_pretty(self)
            .map_err(|e| KatzError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for ParserConfig {
    /// Username linked to each of the three secret kinds
    fn default() -> Self {
        let mapper = |edge: &str, target: &str| MapperConfig {
            source: "domain.user.name".to_string(),
            edge: edge.to_string(),
            target: target.to_string(),
        };
        Self {
            mappers: vec![
                mapper("has_password", "domain.user.password"),
                mapper("has_hash", "domain.user.ntlm"),
                mapper("has_hash", "domain.user.sha1"),
            ],
            used_facts: Vec::new(),
        }
    }
}
