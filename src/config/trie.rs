//! Trie configuration module.

use super::{ConfigResult, Validate};
use crate::data_structures::HeluTrieConfig;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Trie configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrieConfig {
    /// Maximum word length accepted on insert
    pub max_depth: usize,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            max_depth: HeluTrieConfig::default().max_depth,
        }
    }
}

impl From<&TrieConfig> for HeluTrieConfig {
    fn from(config: &TrieConfig) -> Self {
        Self {
            max_depth: config.max_depth,
        }
    }
}

impl Validate for TrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_depth".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
