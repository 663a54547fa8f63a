//! Dictionary configuration module.
//!
//! This module defines where the word list is read from and the limits
//! applied while reading it.

use super::{ConfigResult, Validate};
use crate::dictionary::{DictionaryOptions, DictionaryReader, OverlongLinePolicy};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Dictionary configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DictionaryConfig {
    /// Path of the newline-delimited word list
    pub path: PathBuf,

    /// Maximum line length in characters
    pub max_line_length: usize,

    /// Handling of lines over `max_line_length`
    pub overlong_lines: OverlongLinePolicy,

    /// Maximum number of words (None for no limit)
    pub max_words: Option<usize>,

    /// Whether empty lines are dropped
    pub skip_blank_lines: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        let options = DictionaryOptions::default();
        Self {
            path: PathBuf::from("dictionary.txt"),
            max_line_length: options.max_line_length,
            overlong_lines: options.overlong_lines,
            max_words: options.max_words,
            skip_blank_lines: options.skip_blank_lines,
        }
    }
}

impl DictionaryConfig {
    /// Reading limits described by this configuration.
    pub fn options(&self) -> DictionaryOptions {
        DictionaryOptions {
            max_line_length: self.max_line_length,
            overlong_lines: self.overlong_lines,
            max_words: self.max_words,
            skip_blank_lines: self.skip_blank_lines,
        }
    }

    /// A reader applying this configuration's limits.
    pub fn reader(&self) -> DictionaryReader {
        DictionaryReader::new(self.options())
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "dictionary.path must not be empty".to_string(),
            ));
        }

        if self.max_line_length == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "dictionary.max_line_length".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.max_words == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "dictionary.max_words".to_string(),
                message: "must be greater than 0 when set".to_string(),
            });
        }

        Ok(())
    }
}
