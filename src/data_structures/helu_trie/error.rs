//! Error types for the Helu Trie.
//!
//! This module defines the error types that can occur during Helu Trie operations.

/// Errors that can occur in Helu Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum HeluTrieError {
    /// A word contains a character outside `a..=z`.
    #[error("Unsupported character {character:?} at position {position} in word '{word}'")]
    UnsupportedCharacter {
        /// The rejected word.
        word: String,
        /// The offending character.
        character: char,
        /// Character offset of the offending character.
        position: usize,
    },

    /// A word is longer than the configured maximum depth.
    #[error("Word of length {length} exceeds maximum trie depth of {max_depth}")]
    WordTooLong {
        /// Length of the rejected word in characters.
        length: usize,
        /// The maximum allowed depth.
        max_depth: usize,
    },

    /// Node storage could not be grown.
    #[error("Failed to allocate {requested} trie node(s)")]
    AllocationFailed {
        /// Number of nodes that were being reserved.
        requested: usize,
    },
}
