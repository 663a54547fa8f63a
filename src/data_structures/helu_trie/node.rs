//! Node implementation for the Helu Trie.
//!
//! Nodes live in an arena owned by the trie. A child slot stores the arena
//! index of the child, and every index except the root's appears in exactly
//! one slot.

use super::alphabet::ALPHABET_SIZE;

/// Index of a node inside a trie's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node is always the first node allocated.
    pub const ROOT: NodeId = NodeId(0);

    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in the Helu Trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieNode {
    /// Child links, one per letter
    pub children: [Option<NodeId>; ALPHABET_SIZE],

    /// Number of insertions that terminated at this node
    pub count: u64,
}

impl TrieNode {
    /// Creates a node with a zero count and no children.
    pub fn new() -> Self {
        Self {
            children: [None; ALPHABET_SIZE],
            count: 0,
        }
    }

    /// Returns the child in `slot`, if linked.
    #[inline]
    pub fn child(&self, slot: usize) -> Option<NodeId> {
        self.children[slot]
    }

    /// Iterates over `(slot, child)` for every linked slot in ascending order.
    pub fn linked_children(&self) -> impl DoubleEndedIterator<Item = (usize, NodeId)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(slot, child)| child.map(|id| (slot, id)))
    }

    /// Whether no child slot is linked.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::new()
    }
}
