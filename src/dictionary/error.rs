//! Error types for dictionary loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a word list.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The dictionary file could not be opened.
    #[error("Failed to open dictionary '{path}': {source}")]
    Open {
        /// Path that was opened
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Reading a line failed (IO failure or invalid UTF-8).
    #[error("Failed to read line {line} of dictionary '{name}': {error}")]
    Read {
        /// Name of the dictionary source
        name: String,
        /// One-based line number
        line: usize,
        /// Underlying IO error
        #[source]
        error: std::io::Error,
    },

    /// A line exceeded the configured maximum length.
    #[error("Line {line} of dictionary '{name}' has {length} characters, exceeding the limit of {max_line_length}")]
    LineTooLong {
        /// Name of the dictionary source
        name: String,
        /// One-based line number
        line: usize,
        /// Length of the line in characters
        length: usize,
        /// Configured limit
        max_line_length: usize,
    },

    /// The dictionary holds more words than allowed.
    #[error("Dictionary '{name}' holds more than {max_words} words")]
    TooManyWords {
        /// Name of the dictionary source
        name: String,
        /// Configured limit
        max_words: usize,
    },
}

/// Result type for dictionary operations
pub type DictionaryResult<T> = Result<T, DictionaryError>;
