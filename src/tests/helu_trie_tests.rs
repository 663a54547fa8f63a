//! Property-based tests for the Helu Trie.

use super::test_utils::word_strategy;
use crate::data_structures::helu_trie::{destroy, HeluTrie, HeluTrieConfig, HeluTrieError};
use proptest::prelude::*;
use std::collections::HashMap;
use test_case::test_case;

fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..64)
}

fn tally(words: &[String]) -> HashMap<&str, u64> {
    let mut counts = HashMap::new();
    for word in words {
        *counts.entry(word.as_str()).or_insert(0) += 1;
    }
    counts
}

proptest! {
    // Property: every word reads back the number of times it was inserted
    #[test]
    fn prop_counts_match_insertions(words in words_strategy()) {
        let trie = HeluTrie::from_words(HeluTrieConfig::default(), &words).unwrap();

        for (word, expected) in tally(&words) {
            prop_assert_eq!(trie.occurrences(word).unwrap(), expected);
        }
        prop_assert_eq!(trie.len(), tally(&words).len());
        prop_assert_eq!(trie.total_occurrences(), words.len() as u64);
    }

    // Property: final counts do not depend on insertion order
    #[test]
    fn prop_order_independence(
        (words, shuffled) in words_strategy().prop_flat_map(|words| {
            let shuffled = Just(words.clone()).prop_shuffle();
            (Just(words), shuffled)
        }),
        lookups in prop::collection::vec(word_strategy(), 0..16),
    ) {
        let forward = HeluTrie::from_words(HeluTrieConfig::default(), &words).unwrap();
        let reordered = HeluTrie::from_words(HeluTrieConfig::default(), &shuffled).unwrap();

        prop_assert_eq!(forward.entries(), reordered.entries());
        prop_assert_eq!(forward.node_count(), reordered.node_count());
        for lookup in lookups.iter().chain(words.iter()) {
            prop_assert_eq!(forward.occurrences(lookup).unwrap(), reordered.occurrences(lookup).unwrap());
        }
    }

    // Property: a word that was never inserted reads as zero
    #[test]
    fn prop_absent_words_are_zero(words in words_strategy(), lookup in word_strategy()) {
        let trie = HeluTrie::from_words(HeluTrieConfig::default(), &words).unwrap();

        if !words.contains(&lookup) {
            prop_assert_eq!(trie.occurrences(&lookup).unwrap(), 0);
        }
    }

    // Property: entries lists each distinct word once, sorted
    #[test]
    fn prop_entries_sorted_and_complete(words in words_strategy()) {
        let trie = HeluTrie::from_words(HeluTrieConfig::default(), &words).unwrap();
        let entries = trie.entries();

        let mut expected: Vec<(String, u64)> = tally(&words)
            .into_iter()
            .map(|(word, count)| (word.to_string(), count))
            .collect();
        expected.sort();
        prop_assert_eq!(entries, expected);
    }

    // Property: teardown releases every node exactly once
    #[test]
    fn prop_destroy_releases_all_nodes(words in words_strategy()) {
        let trie = HeluTrie::from_words(HeluTrieConfig::default(), &words).unwrap();
        let nodes = trie.node_count();
        let order = trie.post_order();

        let mut seen = order.clone();
        seen.sort_by_key(|id| id.index());
        seen.dedup();
        prop_assert_eq!(seen.len(), nodes);

        prop_assert_eq!(trie.destroy(), nodes);
    }

    // Property: rejected words never change the trie
    #[test]
    fn prop_rejected_words_leave_trie_unchanged(
        words in words_strategy(),
        prefix in word_strategy(),
        bad in "[A-Z0-9 _\\-]",
    ) {
        let mut trie = HeluTrie::from_words(HeluTrieConfig::default(), &words).unwrap();
        let before = trie.entries();
        let nodes = trie.node_count();

        let word = format!("{prefix}{bad}");
        let is_unsupported = matches!(
            trie.insert(&word),
            Err(HeluTrieError::UnsupportedCharacter { .. })
        );
        prop_assert!(is_unsupported);
        prop_assert_eq!(trie.entries(), before);
        prop_assert_eq!(trie.node_count(), nodes);
    }
}

#[test_case(&[], "anything", 0 ; "empty dictionary")]
#[test_case(&["ucf", "no", "note", "corg"], "notaword", 0 ; "smoke absent word")]
#[test_case(&["ucf", "no", "note", "corg"], "ucf", 1 ; "smoke ucf")]
#[test_case(&["ucf", "no", "note", "corg"], "no", 1 ; "smoke no")]
#[test_case(&["ucf", "no", "note", "corg"], "note", 1 ; "smoke note")]
#[test_case(&["ucf", "no", "note", "corg"], "corg", 1 ; "smoke corg")]
#[test_case(&["cat", "cat"], "cat", 2 ; "duplicate word")]
#[test_case(&["cat", "cat"], "ca", 0 ; "unterminated prefix")]
#[test_case(&["cat", "cat"], "c", 0 ; "single letter prefix")]
#[test_case(&["note", "notes"], "not", 0 ; "shared prefix")]
#[test_case(&["note", "notes"], "note", 1 ; "word that is a prefix")]
fn test_occurrences(words: &[&str], query: &str, expected: u64) {
    let trie = HeluTrie::from_words(HeluTrieConfig::default(), words).unwrap();
    assert_eq!(trie.occurrences(query).unwrap(), expected);
}

#[test]
fn test_destroying_empty_handle_is_noop() {
    assert!(destroy(None).is_none());

    let trie = HeluTrie::new().unwrap();
    let handle = destroy(Some(trie));
    assert!(destroy(handle).is_none());
}

#[test]
fn test_deep_word_teardown() {
    let word = "z".repeat(10_000);
    let mut trie = HeluTrie::with_config(HeluTrieConfig { max_depth: 10_000 }).unwrap();
    trie.insert(&word).unwrap();

    assert_eq!(trie.occurrences(&word).unwrap(), 1);
    assert_eq!(trie.destroy(), 10_001);
}

#[test]
fn test_deep_word_entries() {
    let word = "a".repeat(200_000);
    let mut trie = HeluTrie::with_config(HeluTrieConfig { max_depth: 200_000 }).unwrap();
    trie.insert(&word).unwrap();
    trie.insert("ab").unwrap();

    let entries = trie.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], (word.clone(), 1));
    assert_eq!(entries[1], ("ab".to_string(), 1));
}
