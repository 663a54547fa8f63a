//! Query configuration module.
//!
//! Lists the words reported after the index is built.

use super::{ConfigResult, Validate};
use crate::data_structures::helu_trie::alphabet;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Words reported when none are given on the command line.
pub const DEFAULT_QUERY_WORDS: [&str; 5] = ["notaword", "ucf", "no", "note", "corg"];

/// Query configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryConfig {
    /// Words to look up, in report order
    pub words: Vec<String>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            words: DEFAULT_QUERY_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl Validate for QueryConfig {
    fn validate(&self) -> ConfigResult<()> {
        for word in &self.words {
            if let Some(c) = word.chars().find(|&c| alphabet::slot_for(c).is_none()) {
                return Err(ConfigError::ValidationError(format!(
                    "query word '{word}' contains unsupported character {c:?}"
                )));
            }
        }
        Ok(())
    }
}
