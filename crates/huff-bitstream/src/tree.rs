//! Huffman tree construction
//!
//! The builder repeatedly merges the two lightest candidates. Ties are broken
//! by creation order: leaves in frequency-table order first, then internal
//! nodes in the order they were merged. The same frequency table therefore
//! always produces the same tree shape.

use huff_core::{FrequencyTable, Symbol};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Huffman tree node
///
/// Internal nodes own their two children outright; there is no sharing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode<S> {
    Leaf {
        symbol: S,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffmanNode<S>>,
        right: Box<HuffmanNode<S>>,
    },
}

impl<S: Symbol> HuffmanNode<S> {
    fn merge(left: Self, right: Self) -> Self {
        HuffmanNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } => *weight,
            HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// Symbol held by a leaf
    pub fn symbol(&self) -> Option<S> {
        match self {
            HuffmanNode::Leaf { symbol, .. } => Some(*symbol),
            HuffmanNode::Internal { .. } => None,
        }
    }

    /// Child reached by following `bit` (false = left, true = right)
    ///
    /// Leaves have no children, so this returns `None` for them.
    pub fn child(&self, bit: bool) -> Option<&HuffmanNode<S>> {
        match self {
            HuffmanNode::Leaf { .. } => None,
            HuffmanNode::Internal { left, right, .. } => Some(if bit { right } else { left }),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 0,
            HuffmanNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// A built Huffman tree; read-only once constructed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: HuffmanNode<S>,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Build a tree from symbol frequencies
    ///
    /// Returns `None` for an empty table. A table with a single symbol yields
    /// a lone leaf root.
    pub fn build(frequencies: &FrequencyTable<S>) -> Option<Self> {
        let mut heap = BinaryHeap::with_capacity(frequencies.len());
        for (seq, (symbol, weight)) in frequencies.iter().enumerate() {
            heap.push(Candidate {
                weight,
                seq,
                node: HuffmanNode::Leaf { symbol, weight },
            });
        }
        let mut next_seq = heap.len();

        loop {
            let first = heap.pop()?;
            let Some(second) = heap.pop() else {
                let tree = Self { root: first.node };
                tracing::debug!(
                    leaves = tree.leaf_count(),
                    depth = tree.depth(),
                    weight = tree.weight(),
                    "built huffman tree"
                );
                return Some(tree);
            };

            tracing::trace!(
                left = first.weight,
                right = second.weight,
                seq = next_seq,
                "merging candidates"
            );
            let node = HuffmanNode::merge(first.node, second.node);
            heap.push(Candidate {
                weight: node.weight(),
                seq: next_seq,
                node,
            });
            next_seq += 1;
        }
    }

    pub fn root(&self) -> &HuffmanNode<S> {
        &self.root
    }

    /// Total weight; equals the analyzed input's length
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    pub fn internal_count(&self) -> usize {
        self.leaf_count() - 1
    }

    /// Length of the longest root-to-leaf path (0 for a lone leaf)
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Whether the tree is a lone leaf (one distinct symbol)
    pub fn is_single_leaf(&self) -> bool {
        self.root.is_leaf()
    }
}

/// Build a tree from symbol frequencies; `None` for an empty table
pub fn build<S: Symbol>(frequencies: &FrequencyTable<S>) -> Option<HuffmanTree<S>> {
    HuffmanTree::build(frequencies)
}

/// Heap entry ordered so that `BinaryHeap` pops the lightest, oldest node first
struct Candidate<S> {
    weight: u64,
    seq: usize,
    node: HuffmanNode<S>,
}

impl<S> PartialEq for Candidate<S> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl<S> Eq for Candidate<S> {}

impl<S> PartialOrd for Candidate<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Candidate<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: max-heap becomes min-heap on (weight, seq)
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
