use crate::algorithms::frequency::SYMBOL_COUNT;
use crate::algorithms::tree::TrieNode;

/// Per-byte code strings made of `'0'` and `'1'`.
///
/// An empty code marks a byte that never appears, or the lone byte of a single-symbol trie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<String>,
}

impl CodeTable {
    /// Walks the trie depth-first, `'0'` for every left turn and `'1'` for every right turn.
    pub fn from_tree(root: Option<&TrieNode>) -> Self {
        let mut codes = vec![String::new(); SYMBOL_COUNT];
        if let Some(root) = root {
            let mut path = String::new();
            assign_codes(root, &mut path, &mut codes);
        }
        Self { codes }
    }

    pub fn get(&self, byte: u8) -> &str {
        &self.codes[byte as usize]
    }

    /// Bytes that received a non-empty code, byte value ascending.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter(|(_, code)| !code.is_empty())
            .map(|(byte, code)| (byte as u8, code.as_str()))
    }

    /// Length of the code string `data` would encode to.
    pub fn encoded_len(&self, data: &[u8]) -> usize {
        data.iter().map(|&byte| self.codes[byte as usize].len()).sum()
    }
}

// depth is bounded by the 256 possible leaves, so plain recursion is fine here
fn assign_codes(node: &TrieNode, path: &mut String, codes: &mut [String]) {
    match node.children() {
        None => codes[node.byte() as usize] = path.clone(),
        Some((left, right)) => {
            path.push('0');
            assign_codes(left, path, codes);
            path.pop();

            path.push('1');
            assign_codes(right, path, codes);
            path.pop();
        }
    }
}
