//! YAML engine configuration: input ceiling and random-array defaults.
//!
//! Files carry a `version` field; anything other than
//! [`SUPPORTED_CONFIG_VERSION`] is refused before validation.

use crate::random::RandomArray;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SUPPORTED_CONFIG_VERSION: u32 = 1;
pub const DEFAULT_MAX_INPUT_LEN: usize = 256;

/// Engine settings, usually loaded from `sortviz.yaml`.
///
/// ```yaml
/// version: 1
/// max_input_len: 256
/// random:
///   len: 10
///   max: 100
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub version: u32,
    /// Longest input accepted; longer input is rejected, never truncated.
    pub max_input_len: usize,
    pub random: RandomArray,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: SUPPORTED_CONFIG_VERSION,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            random: RandomArray::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("unsupported config version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl EngineConfig {
    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        let cfg: EngineConfig = serde_yaml::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != SUPPORTED_CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                supported: SUPPORTED_CONFIG_VERSION,
            });
        }
        if self.max_input_len < 2 {
            return Err(ConfigError::Invalid(format!(
                "max_input_len must be at least 2, got {}",
                self.max_input_len
            )));
        }
        if self.random.max < 0 {
            return Err(ConfigError::Invalid(format!(
                "random.max must be non-negative, got {}",
                self.random.max
            )));
        }
        if self.random.len > self.max_input_len {
            return Err(ConfigError::Invalid(format!(
                "random.len ({}) exceeds max_input_len ({})",
                self.random.len, self.max_input_len
            )));
        }
        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<EngineConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    EngineConfig::from_yaml(&raw)
}
