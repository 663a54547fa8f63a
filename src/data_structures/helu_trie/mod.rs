//! Helu Trie Implementation
//!
//! This module provides a fixed-alphabet prefix tree that counts how many
//! times each exact word was inserted. Keys are restricted to lowercase ASCII
//! letters; every other character is rejected before the tree is touched.
//!
//! Nodes are stored in an arena owned by the trie and linked by index. Each
//! node other than the root is referenced by exactly one parent slot, so the
//! structure stays a rooted tree for its whole lifetime.

pub mod alphabet;
mod error;
mod node;

use tracing::{debug, trace};

use alphabet::ALPHABET_SIZE;
pub use error::HeluTrieError;
pub use node::{NodeId, TrieNode};

/// Result type for Helu Trie operations
pub type HeluTrieResult<T> = Result<T, HeluTrieError>;

/// Configuration options for the Helu Trie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeluTrieConfig {
    /// Maximum word length accepted by `insert`
    pub max_depth: usize,
}

impl Default for HeluTrieConfig {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}

/// Helu Trie is an exact-match occurrence counter over lowercase words.
///
/// Key features:
/// * O(word length) insert and lookup with constant-time child dispatch
/// * Fallible node allocation reported as [`HeluTrieError::AllocationFailed`]
/// * Post-order teardown through [`HeluTrie::destroy`]
#[derive(Debug, Clone)]
pub struct HeluTrie {
    /// Node arena; index 0 is the root
    nodes: Vec<TrieNode>,

    /// Configuration options
    config: HeluTrieConfig,

    /// Number of nodes with a non-zero count
    distinct_words: usize,

    /// Sum of all counts
    total_occurrences: u64,
}

impl HeluTrie {
    /// Creates a new empty `HeluTrie` with default configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(HeluTrie)` - A trie holding only its root node.
    /// * `Err(HeluTrieError::AllocationFailed)` - If the root could not be allocated.
    pub fn new() -> HeluTrieResult<Self> {
        Self::with_config(HeluTrieConfig::default())
    }

    /// Creates a new empty `HeluTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: HeluTrieConfig) -> HeluTrieResult<Self> {
        let mut nodes = Vec::new();
        nodes
            .try_reserve(1)
            .map_err(|_| HeluTrieError::AllocationFailed { requested: 1 })?;
        nodes.push(TrieNode::new());

        Ok(Self {
            nodes,
            config,
            distinct_words: 0,
            total_occurrences: 0,
        })
    }

    /// Builds a trie by inserting every word of `words` in order.
    ///
    /// Stops at the first word that cannot be inserted.
    pub fn from_words<I, W>(config: HeluTrieConfig, words: I) -> HeluTrieResult<Self>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut trie = Self::with_config(config)?;
        for word in words {
            trie.insert(word)?;
        }
        Ok(trie)
    }

    /// Records one more occurrence of `word`.
    ///
    /// Missing nodes along the path are created and linked. The empty string
    /// is accepted and counted on the root.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert; must consist of `a..=z` only.
    ///
    /// # Returns
    ///
    /// * `Ok(u64)` - The occurrence count of `word` after this insertion.
    /// * `Err(HeluTrieError)` - If the word was rejected or nodes could not be
    ///   allocated. The trie is unchanged in either case.
    pub fn insert<W>(&mut self, word: W) -> HeluTrieResult<u64>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        validate_characters(word)?;
        if word.len() > self.config.max_depth {
            return Err(HeluTrieError::WordTooLong {
                length: word.len(),
                max_depth: self.config.max_depth,
            });
        }

        let mut current = NodeId::ROOT;
        for (depth, slot) in slots(word).enumerate() {
            current = match self.nodes[current.index()].child(slot) {
                Some(next) => next,
                None => self.link_child(current, slot, word.len() - depth)?,
            };
        }

        let node = &mut self.nodes[current.index()];
        if node.count == 0 {
            self.distinct_words += 1;
        }
        node.count += 1;
        self.total_occurrences += 1;

        Ok(node.count)
    }

    /// Creates a node and links it into `slot` of `parent`.
    ///
    /// Room for all `remaining` nodes of the current word is reserved up front,
    /// so later calls for the same word cannot fail.
    fn link_child(&mut self, parent: NodeId, slot: usize, remaining: usize) -> HeluTrieResult<NodeId> {
        self.nodes
            .try_reserve(remaining)
            .map_err(|_| HeluTrieError::AllocationFailed {
                requested: remaining,
            })?;

        let child = NodeId::new(self.nodes.len());
        self.nodes.push(TrieNode::new());
        self.nodes[parent.index()].children[slot] = Some(child);
        trace!(parent = parent.index(), child = child.index(), slot, "Linked trie node");

        Ok(child)
    }

    /// Returns how many times exactly `word` was inserted.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to look up; must consist of `a..=z` only.
    ///
    /// # Returns
    ///
    /// * `Ok(0)` - If `word` was never inserted, including when it is only a
    ///   prefix of inserted words.
    /// * `Ok(n)` - If `word` was inserted `n` times.
    /// * `Err(HeluTrieError::UnsupportedCharacter)` - If `word` contains a
    ///   character outside the alphabet.
    pub fn occurrences<W>(&self, word: W) -> HeluTrieResult<u64>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        validate_characters(word)?;

        let mut current = NodeId::ROOT;
        for slot in slots(word) {
            match self.nodes[current.index()].child(slot) {
                Some(next) => current = next,
                None => return Ok(0),
            }
        }

        Ok(self.nodes[current.index()].count)
    }

    /// Number of distinct words with a non-zero count.
    pub fn len(&self) -> usize {
        self.distinct_words
    }

    /// Whether no word has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.distinct_words == 0
    }

    /// Total number of successful insertions.
    pub fn total_occurrences(&self) -> u64 {
        self.total_occurrences
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the configuration of this trie.
    pub fn config(&self) -> &HeluTrieConfig {
        &self.config
    }

    /// Returns the node identified by `id`, if it belongs to this trie.
    pub fn node(&self, id: NodeId) -> Option<&TrieNode> {
        self.nodes.get(id.index())
    }

    /// Returns every inserted word with its count, in lexicographic order.
    ///
    /// Iterative, like [`HeluTrie::post_order`].
    pub fn entries(&self) -> Vec<(String, u64)> {
        let mut result = Vec::with_capacity(self.distinct_words);
        let mut word = String::new();
        // (node, length of the parent's word, label of the edge into node)
        let mut pending: Vec<(NodeId, usize, Option<char>)> = vec![(NodeId::ROOT, 0, None)];

        while let Some((id, parent_len, label)) = pending.pop() {
            word.truncate(parent_len);
            if let Some(c) = label {
                word.push(c);
            }

            let node = &self.nodes[id.index()];
            if node.count > 0 {
                result.push((word.clone(), node.count));
            }

            let len = word.len();
            pending.extend(
                node.linked_children()
                    .rev()
                    .map(|(slot, child)| (child, len, Some(alphabet::symbol_at(slot)))),
            );
        }

        result
    }

    /// Returns every node id with children ordered before their parent.
    ///
    /// The root is always last. Iterative, so deep tries do not grow the call stack.
    pub fn post_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut pending = vec![(NodeId::ROOT, false)];

        while let Some((id, expanded)) = pending.pop() {
            if expanded {
                order.push(id);
                continue;
            }
            pending.push((id, true));
            pending.extend(
                self.nodes[id.index()]
                    .linked_children()
                    .rev()
                    .map(|(_, child)| (child, false)),
            );
        }

        order
    }

    /// Releases every node, children before parents, then the trie itself.
    ///
    /// # Returns
    ///
    /// The number of nodes released, root included.
    pub fn destroy(mut self) -> usize {
        let mut released = 0;
        for id in self.post_order() {
            let node = &mut self.nodes[id.index()];
            // children were released earlier in the walk
            node.children = [None; ALPHABET_SIZE];
            node.count = 0;
            released += 1;
        }

        debug!(
            released,
            distinct_words = self.distinct_words,
            total_occurrences = self.total_occurrences,
            "Destroyed trie"
        );
        released
    }
}

/// Destroys the trie behind `trie`, if any, and returns the empty handle.
///
/// Passing `None` is a no-op.
pub fn destroy(trie: Option<HeluTrie>) -> Option<HeluTrie> {
    if let Some(trie) = trie {
        trie.destroy();
    }
    None
}

fn validate_characters(word: &str) -> HeluTrieResult<()> {
    match word
        .chars()
        .enumerate()
        .find(|&(_, c)| alphabet::slot_for(c).is_none())
    {
        Some((position, character)) => Err(HeluTrieError::UnsupportedCharacter {
            word: word.to_string(),
            character,
            position,
        }),
        None => Ok(()),
    }
}

/// Child slots along the path of a word that passed `validate_characters`.
fn slots(word: &str) -> impl Iterator<Item = usize> + '_ {
    word.bytes().map(|b| usize::from(b - b'a'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie_of(words: &[&str]) -> HeluTrie {
        HeluTrie::from_words(HeluTrieConfig::default(), words).unwrap()
    }

    #[test]
    fn test_trie_basic_operations() {
        let mut trie = HeluTrie::new().unwrap();

        // Test initial state
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);

        // Test insertion
        assert_eq!(trie.insert("hello").unwrap(), 1);
        assert_eq!(trie.len(), 1);
        assert!(!trie.is_empty());
        assert_eq!(trie.node_count(), 6);

        // Test retrieval
        assert_eq!(trie.occurrences("hello").unwrap(), 1);
        assert_eq!(trie.occurrences("hell").unwrap(), 0);
        assert_eq!(trie.occurrences("helloo").unwrap(), 0);
        assert_eq!(trie.occurrences("world").unwrap(), 0);

        // Repeated insertion accumulates without new nodes
        assert_eq!(trie.insert("hello").unwrap(), 2);
        assert_eq!(trie.occurrences("hello").unwrap(), 2);
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.total_occurrences(), 2);
        assert_eq!(trie.node_count(), 6);
    }

    #[test]
    fn test_prefix_is_not_counted() {
        let trie = trie_of(&["note", "notes"]);

        assert_eq!(trie.occurrences("note").unwrap(), 1);
        assert_eq!(trie.occurrences("notes").unwrap(), 1);
        assert_eq!(trie.occurrences("not").unwrap(), 0);
        assert_eq!(trie.occurrences("n").unwrap(), 0);
        assert_eq!(trie.occurrences("").unwrap(), 0);
    }

    #[test]
    fn test_duplicate_word_counts() {
        let trie = trie_of(&["cat", "cat"]);

        assert_eq!(trie.occurrences("cat").unwrap(), 2);
        assert_eq!(trie.occurrences("ca").unwrap(), 0);
        assert_eq!(trie.occurrences("c").unwrap(), 0);
    }

    #[test]
    fn test_empty_word_counts_on_root() {
        let mut trie = HeluTrie::new().unwrap();
        assert_eq!(trie.occurrences("").unwrap(), 0);

        assert_eq!(trie.insert("").unwrap(), 1);
        assert_eq!(trie.occurrences("").unwrap(), 1);
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.node(NodeId::ROOT).unwrap().count, 1);
    }

    #[test]
    fn test_unsupported_character_leaves_trie_unchanged() {
        let mut trie = trie_of(&["ab"]);

        let err = trie.insert("abC").unwrap_err();
        assert_eq!(
            err,
            HeluTrieError::UnsupportedCharacter {
                word: "abC".to_string(),
                character: 'C',
                position: 2,
            }
        );
        assert_eq!(trie.node_count(), 3);
        assert_eq!(trie.total_occurrences(), 1);

        // Lookups validate the whole word even when the path ends early
        assert!(matches!(
            trie.occurrences("zz9"),
            Err(HeluTrieError::UnsupportedCharacter { character: '9', position: 2, .. })
        ));
        assert!(trie.occurrences("ñ").is_err());
    }

    #[test]
    fn test_word_too_long() {
        let mut trie = HeluTrie::with_config(HeluTrieConfig { max_depth: 3 }).unwrap();

        assert_eq!(trie.insert("abc").unwrap(), 1);
        assert_eq!(
            trie.insert("abcd").unwrap_err(),
            HeluTrieError::WordTooLong {
                length: 4,
                max_depth: 3,
            }
        );
        assert_eq!(trie.node_count(), 4);

        // Lookups are not bounded by the insert limit
        assert_eq!(trie.occurrences("abcd").unwrap(), 0);
    }

    #[test]
    fn test_entries_sorted() {
        let trie = trie_of(&["note", "no", "corg", "ucf", "no"]);

        assert_eq!(
            trie.entries(),
            vec![
                ("corg".to_string(), 1),
                ("no".to_string(), 2),
                ("note".to_string(), 1),
                ("ucf".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_post_order_children_before_parent() {
        let trie = trie_of(&["ab", "ac", "b"]);
        let order = trie.post_order();

        assert_eq!(order.len(), trie.node_count());
        assert_eq!(order.last(), Some(&NodeId::ROOT));

        let position = |id: NodeId| order.iter().position(|&o| o == id).unwrap();
        for &id in &order {
            for (_, child) in trie.node(id).unwrap().linked_children() {
                assert!(position(child) < position(id));
            }
        }
    }

    #[test]
    fn test_destroy_releases_every_node() {
        let trie = trie_of(&["ucf", "no", "note", "corg"]);
        let nodes = trie.node_count();

        assert_eq!(trie.destroy(), nodes);
    }

    #[test]
    fn test_destroy_handle_is_idempotent() {
        let handle = Some(trie_of(&["cat"]));

        let handle = destroy(handle);
        assert!(handle.is_none());

        let handle = destroy(handle);
        assert!(handle.is_none());
    }

    #[test]
    fn test_destroy_empty_trie() {
        let trie = HeluTrie::new().unwrap();
        assert_eq!(trie.occurrences("anything").unwrap(), 0);
        assert_eq!(trie.destroy(), 1);
    }
}
