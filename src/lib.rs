//! Helu Library
//!
//! Helu is an in-memory word-frequency index. A word list is read from a
//! dictionary source into a fixed-alphabet trie, which then answers
//! exact-match occurrence-count queries.
//!
//! # Architecture
//!
//! - [`data_structures::helu_trie`]: the trie itself
//! - [`dictionary`]: bounded reading of newline-delimited word lists
//! - [`report`]: lookup reports rendered to any writer
//! - [`config`]: layered, validated configuration
//! - [`error`]: crate-wide error type and reporting hook
//!
//! ```
//! use helu_lib::data_structures::{HeluTrie, HeluTrieConfig};
//!
//! let trie = HeluTrie::from_words(HeluTrieConfig::default(), ["cat", "cat", "car"]).unwrap();
//! assert_eq!(trie.occurrences("cat").unwrap(), 2);
//! assert_eq!(trie.occurrences("ca").unwrap(), 0);
//! ```

pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;
pub mod report;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Helu.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing-backed error reporter.
pub fn init() {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
}
