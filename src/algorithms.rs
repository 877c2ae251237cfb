pub mod code_table;
pub mod frequency;
pub mod header;
pub mod huffman;
pub mod tree;

use crate::algorithms::code_table::CodeTable;
use crate::algorithms::frequency::FrequencyTable;
use crate::algorithms::tree::{TrieNode, build_tree};

/// Frequencies and codes for one input, built with the same steps the encoder uses.
#[derive(Clone, Debug)]
pub struct Analysis {
    pub frequencies: FrequencyTable,
    pub codes: CodeTable,
    /// longest code length, 0 without a tree or for a lone leaf
    pub depth: usize,
}

impl Analysis {
    pub fn of_frequencies(frequencies: FrequencyTable) -> Self {
        let root = build_tree(&frequencies);
        let codes = CodeTable::from_tree(root.as_ref());
        let depth = root.as_ref().map_or(0, TrieNode::depth);
        Self {
            frequencies,
            codes,
            depth,
        }
    }

    pub fn of_bytes(data: &[u8]) -> Self {
        Self::of_frequencies(FrequencyTable::from_bytes(data))
    }

    /// Length in bits of the code string for the analysed input.
    pub fn code_bits(&self) -> u64 {
        self.codes
            .iter()
            .map(|(byte, code)| self.frequencies.get(byte) * code.len() as u64)
            .sum()
    }
}
