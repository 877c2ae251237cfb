use core::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::algorithms::frequency::FrequencyTable;

if_tracing! {
    use tracing::trace;
}

/// A node of the Huffman trie.
///
/// Internal nodes carry a synthetic byte value: the smallest byte value found in their subtree.
/// This lets them be ranked against leaves with the same `(frequency, byte)` order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrieNode {
    Leaf {
        byte: u8,
        frequency: u64,
    },
    Internal {
        byte: u8,
        frequency: u64,
        left: Box<TrieNode>,
        right: Box<TrieNode>,
    },
}

impl TrieNode {
    pub const fn leaf(byte: u8, frequency: u64) -> Self {
        TrieNode::Leaf { byte, frequency }
    }

    pub fn byte(&self) -> u8 {
        match *self {
            TrieNode::Leaf { byte, .. } | TrieNode::Internal { byte, .. } => byte,
        }
    }

    pub fn frequency(&self) -> u64 {
        match *self {
            TrieNode::Leaf { frequency, .. } | TrieNode::Internal { frequency, .. } => frequency,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TrieNode::Leaf { .. })
    }

    /// `(left, right)` for internal nodes, `None` for leaves.
    pub fn children(&self) -> Option<(&TrieNode, &TrieNode)> {
        match self {
            TrieNode::Leaf { .. } => None,
            TrieNode::Internal { left, right, .. } => Some((left, right)),
        }
    }

    /// The key nodes are selected by: frequency first, byte value second.
    pub fn rank(&self) -> (u64, u8) {
        (self.frequency(), self.byte())
    }

    /// Joins two nodes under a new parent.
    ///
    /// The parent takes the smaller of the two byte values, and the child holding that
    /// smaller byte value goes to the left.
    pub fn combine(a: TrieNode, b: TrieNode) -> TrieNode {
        let (left, right) = if a.byte() < b.byte() { (a, b) } else { (b, a) };
        TrieNode::Internal {
            byte: left.byte(),
            frequency: left.frequency() + right.frequency(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self.children() {
            None => 0,
            Some((left, right)) => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Heap entry ordering nodes by their rank.
///
/// Byte values are unique across the working set, so two entries never compare equal
/// and the pop order is fully determined.
struct Ranked(TrieNode);

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.0.rank() == other.0.rank()
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.rank().cmp(&other.0.rank())
    }
}

/// Builds the Huffman trie for `table`, or `None` when every frequency is zero.
///
/// A table with a single present byte yields that byte's leaf as the root.
pub fn build_tree(table: &FrequencyTable) -> Option<TrieNode> {
    let mut heap: BinaryHeap<Reverse<Ranked>> = table
        .symbols()
        .map(|symbol| Reverse(Ranked(TrieNode::leaf(symbol.byte, symbol.frequency))))
        .collect();

    // each iteration takes the two globally smallest nodes
    loop {
        let Reverse(Ranked(first)) = heap.pop()?;
        let Some(Reverse(Ranked(second))) = heap.pop() else {
            return Some(first);
        };
        if_tracing! {
            trace!(target: "huffman", first = ?first.rank(), second = ?second.rank(), "combining nodes");
        }
        heap.push(Reverse(Ranked(TrieNode::combine(first, second))));
    }
}
