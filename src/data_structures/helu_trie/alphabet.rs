// Copyright (c) 2025 Helu Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Child slot dispatch for the lowercase ASCII alphabet.

/// Number of child slots carried by every trie node.
pub const ALPHABET_SIZE: usize = 26;

/// Returns the child slot for `c`, or `None` when `c` is outside `a..=z`.
#[inline]
pub fn slot_for(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some((c as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Returns the character labelling child slot `slot`.
///
/// # Panics
///
/// Panics if `slot >= ALPHABET_SIZE`.
#[inline]
pub fn symbol_at(slot: usize) -> char {
    assert!(slot < ALPHABET_SIZE, "slot {slot} outside alphabet");
    (b'a' + slot as u8) as char
}
