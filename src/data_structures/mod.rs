//! Data structures for Helu.
//!
//! This module contains the index structures behind word-frequency queries.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Fallible allocation surfaced as errors
//! - Input validated before any mutation

pub mod helu_trie;

// Re-export common data structures
pub use helu_trie::{HeluTrie, HeluTrieConfig, HeluTrieError, HeluTrieResult};
