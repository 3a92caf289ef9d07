//! Code table generation
//!
//! Walks a Huffman tree depth-first, appending `0` for every left branch and
//! `1` for every right branch, and records the path to each leaf as that
//! leaf's code.

use crate::bits::BitSequence;
use crate::tree::{HuffmanNode, HuffmanTree};
use huff_core::consts::SINGLE_SYMBOL_CODE;
use huff_core::{FrequencyTable, Symbol};
use std::collections::HashMap;

/// Mapping from symbol to its prefix-free code
///
/// Iteration follows the tree's leaves from left to right.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        from = "Vec<(S, BitSequence)>",
        into = "Vec<(S, BitSequence)>",
        bound(
            serialize = "S: Symbol + serde::Serialize",
            deserialize = "S: Symbol + serde::Deserialize<'de>"
        )
    )
)]
pub struct CodeTable<S> {
    entries: Vec<(S, BitSequence)>,
    index: HashMap<S, usize>,
}

impl<S: Symbol> CodeTable<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Generate the code table for `tree`; an absent tree yields an empty table
    ///
    /// A lone-leaf tree would naturally get the empty code, which cannot
    /// delimit repeated occurrences. It is given the one-bit code `0` instead.
    pub fn from_tree(tree: Option<&HuffmanTree<S>>) -> Self {
        let mut table = Self::new();
        let Some(tree) = tree else {
            return table;
        };

        let root = tree.root();
        if let HuffmanNode::Leaf { symbol, .. } = root {
            table.insert(*symbol, std::iter::once(SINGLE_SYMBOL_CODE).collect());
            return table;
        }

        let mut prefix = BitSequence::new();
        table.assign(root, &mut prefix);
        table
    }

    fn assign(&mut self, node: &HuffmanNode<S>, prefix: &mut BitSequence) {
        match node {
            HuffmanNode::Leaf { symbol, .. } => self.insert(*symbol, prefix.clone()),
            HuffmanNode::Internal { left, right, .. } => {
                prefix.push(false);
                self.assign(left, prefix);
                prefix.pop();

                prefix.push(true);
                self.assign(right, prefix);
                prefix.pop();
            }
        }
    }

    fn insert(&mut self, symbol: S, code: BitSequence) {
        match self.index.get(&symbol) {
            Some(&slot) => self.entries[slot].1 = code,
            None => {
                self.index.insert(symbol, self.entries.len());
                self.entries.push((symbol, code));
            }
        }
    }

    pub fn get(&self, symbol: &S) -> Option<&BitSequence> {
        self.index.get(symbol).map(|&slot| &self.entries[slot].1)
    }

    pub fn code_length(&self, symbol: &S) -> Option<usize> {
        self.get(symbol).map(BitSequence::len)
    }

    pub fn max_code_length(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, code)| code.len())
            .max()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (S, &BitSequence)> + '_ {
        self.entries.iter().map(|(symbol, code)| (*symbol, code))
    }

    /// Bits needed to encode an input with the given frequencies
    ///
    /// Symbols without a code contribute nothing.
    pub fn encoded_len(&self, frequencies: &FrequencyTable<S>) -> u64 {
        frequencies
            .iter()
            .filter_map(|(symbol, count)| self.code_length(&symbol).map(|len| count * len as u64))
            .sum()
    }

    /// Expected code length in bits per symbol under `frequencies`
    pub fn average_code_length(&self, frequencies: &FrequencyTable<S>) -> f64 {
        let total = frequencies.total();
        if total == 0 {
            return 0.0;
        }
        self.encoded_len(frequencies) as f64 / total as f64
    }

    /// Check that no code is a prefix of another
    ///
    /// Tables generated from a tree always pass; this is for tables that were
    /// assembled or deserialized by hand.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<String> = self.entries.iter().map(|(_, code)| code.to_string()).collect();
        codes.sort();
        // After sorting, a code that prefixes any other prefixes its successor
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0].as_str()))
    }
}

impl<S: Symbol> Default for CodeTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> PartialEq for CodeTable<S> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<S: Symbol> Eq for CodeTable<S> {}

impl<S: Symbol> From<Vec<(S, BitSequence)>> for CodeTable<S> {
    fn from(entries: Vec<(S, BitSequence)>) -> Self {
        let mut table = Self::new();
        for (symbol, code) in entries {
            table.insert(symbol, code);
        }
        table
    }
}

impl<S: Symbol> From<CodeTable<S>> for Vec<(S, BitSequence)> {
    fn from(table: CodeTable<S>) -> Self {
        table.entries
    }
}

/// Generate the code table for `tree`; an absent tree yields an empty table
pub fn generate<S: Symbol>(tree: Option<&HuffmanTree<S>>) -> CodeTable<S> {
    CodeTable::from_tree(tree)
}
