use core::fmt::{self, Display};

use anyhow::anyhow;

use crate::algorithms::code_table::CodeTable;
use crate::algorithms::frequency::FrequencyTable;
use crate::algorithms::header::{parse_header, serialize_header};
use crate::algorithms::tree::{TrieNode, build_tree};
use crate::compressor::{Compressor, HuffmanError, Result};
use crate::format::EncodedFile;

if_tracing! {
    use tracing::{debug, info, warn};
}

/// Output of [`encode`]: the frequency header and the code string, one `'0'`/`'1'` per bit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Encoded {
    pub header: String,
    pub code: String,
}

/// Encodes `data`, keeping the original byte order in the code string.
///
/// Empty input gives an empty header and code. Input made of a single distinct byte gives a
/// one-pair header and an empty code; the repeat count lives in the header alone.
pub fn encode(data: &[u8]) -> Encoded {
    if_tracing! {
        let span = tracing::span!(tracing::Level::INFO, "huffman_encode", input_len = data.len());
        let _enter = span.enter();
    }

    let frequencies = FrequencyTable::from_bytes(data);
    let header = serialize_header(&frequencies);
    let root = build_tree(&frequencies);
    let codes = CodeTable::from_tree(root.as_ref());

    if_tracing! {
        debug!(target: "huffman", distinct = frequencies.distinct(), depth = root.as_ref().map_or(0, TrieNode::depth), "code table built");
    }

    let mut code = String::with_capacity(codes.encoded_len(data));
    for &byte in data {
        code.push_str(codes.get(byte));
    }

    if_tracing! {
        info!(target: "huffman", input_len = data.len(), header_len = header.len(), code_len = code.len(), "huffman encode complete");
    }

    Encoded { header, code }
}

/// Decodes a header and code string produced by [`encode`].
///
/// # Errors
///
/// - [`HuffmanError::MalformedHeader`] if the header does not parse.
/// - [`HuffmanError::TruncatedCode`] if the code ends part-way through a symbol.
/// - [`HuffmanError::InvalidBit`] if the code holds anything but `'0'` and `'1'`.
/// - [`HuffmanError::UnexpectedBits`] if a single-symbol header comes with code bits.
/// - [`HuffmanError::OutputTooLarge`] if a single-symbol header repeats its byte more often than
///   memory allows.
pub fn decode(header: &str, code: &str) -> Result<Vec<u8>, HuffmanError> {
    if_tracing! {
        let span = tracing::span!(tracing::Level::INFO, "huffman_decode", header_len = header.len(), code_len = code.len());
        let _enter = span.enter();
    }

    let frequencies = parse_header(header)?;
    let Some(root) = build_tree(&frequencies) else {
        if_tracing! {
            debug!(target: "huffman", "huffman decode passthrough: no symbols");
        }
        return Ok(Vec::new());
    };

    let decoded = match &root {
        TrieNode::Leaf { byte, frequency } => {
            if !code.is_empty() {
                return Err(HuffmanError::UnexpectedBits(code.len()));
            }
            let too_large = HuffmanError::OutputTooLarge(*frequency);
            let count = usize::try_from(*frequency)
                .ok()
                .filter(|&count| count <= isize::MAX as usize)
                .ok_or_else(|| too_large.clone())?;
            let mut out = Vec::new();
            out.try_reserve_exact(count).map_err(|_| too_large)?;
            out.resize(count, *byte);
            out
        }
        TrieNode::Internal { .. } => walk(&root, code)?,
    };

    if_tracing! {
        if decoded.len() as u64 != frequencies.total() {
            warn!(target: "huffman", decoded = decoded.len(), expected = frequencies.total(), "decoded length disagrees with header");
        }
        info!(target: "huffman", code_len = code.len(), output_len = decoded.len(), "huffman decode complete");
    }

    Ok(decoded)
}

/// Follows the code bits through the trie, emitting a byte at every leaf.
fn walk(root: &TrieNode, code: &str) -> Result<Vec<u8>, HuffmanError> {
    let mut out = Vec::new();
    let mut node = root;

    for (position, bit) in code.chars().enumerate() {
        let Some((left, right)) = node.children() else {
            unreachable!("the walk restarts at the root after every leaf");
        };
        node = match bit {
            '0' => left,
            '1' => right,
            found => return Err(HuffmanError::InvalidBit { position, found }),
        };
        if node.is_leaf() {
            out.push(node.byte());
            node = root;
        }
    }

    if !core::ptr::eq(node, root) {
        if_tracing! {
            warn!(target: "huffman", consumed = code.len(), "code string ends mid-symbol");
        }
        return Err(HuffmanError::TruncatedCode { consumed: code.len() });
    }

    Ok(out)
}

/// The Huffman transcoder exposed as a [`Compressor`] over the encoded file layout.
#[derive(Clone, Copy, Debug, Default)]
pub struct HuffmanCoding;

impl Compressor for HuffmanCoding {
    fn compress_bytes(&mut self, data: &[u8]) -> Vec<u8> {
        let Encoded { header, code } = encode(data);
        EncodedFile::new(header, code).to_bytes()
    }

    fn decompress_bytes(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let file = EncodedFile::parse(data).map_err(|e| anyhow!(e))?;
        decode(&file.header, &file.code).map_err(|e| anyhow!(e))
    }

    fn compressor_name(&self) -> String {
        self.to_string()
    }
}

impl Display for HuffmanCoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Huffman Coding")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILE2: &[u8] = b"ddddddddddddddddccccccccbbbbaaff";

    #[test]
    fn roundtrip_tests() {
        crate::tests::roundtrip_test(HuffmanCoding);
    }

    #[test]
    fn encodes_worked_example() {
        let encoded = encode(FILE2);
        assert_eq!(encoded.header, "97 2 98 4 99 8 100 16 102 2");
        assert_eq!(encoded.code.len(), 16 + 8 * 2 + 4 * 3 + 2 * 4 + 2 * 4);
        assert!(encoded.code.starts_with("1111111111111111010101"));
        assert!(encoded.code.ends_with("0000000000010001"));
        assert_eq!(decode(&encoded.header, &encoded.code).unwrap(), FILE2);
    }

    #[test]
    fn preserves_byte_order() {
        // a=00 f=01 d=1
        let encoded = encode(b"dadf");
        assert_eq!(encoded.code, "100101");
        let decoded = decode(&encoded.header, &encoded.code).unwrap();
        assert_eq!(decoded, b"dadf");
        assert_eq!(encode(b"fdda").code, "011100");
    }

    #[test]
    fn empty_input_round_trips_to_nothing() {
        assert_eq!(encode(b""), Encoded::default());
        assert_eq!(decode("", "").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn single_symbol_lives_in_the_header() {
        let encoded = encode(b"aaaaa");
        assert_eq!(encoded.header, "97 5");
        assert_eq!(encoded.code, "");
        assert_eq!(decode("97 5", "").unwrap(), b"aaaaa");
    }

    #[test]
    fn single_symbol_count_beyond_memory_is_an_error() {
        assert_eq!(
            decode(&format!("97 {}", u64::MAX), ""),
            Err(HuffmanError::OutputTooLarge(u64::MAX))
        );
        let past_isize = isize::MAX as u64 + 1;
        assert_eq!(
            decode(&format!("97 {}", past_isize), ""),
            Err(HuffmanError::OutputTooLarge(past_isize))
        );
    }

    #[test]
    fn single_symbol_rejects_code_bits() {
        assert_eq!(decode("97 5", "01"), Err(HuffmanError::UnexpectedBits(2)));
    }

    #[test]
    fn truncated_code_is_reported() {
        // "000" stops one bit short of 'a' or 'f'
        assert_eq!(
            decode("97 2 98 4 99 8 100 16 102 2", "000"),
            Err(HuffmanError::TruncatedCode { consumed: 3 })
        );
        assert_eq!(
            decode("97 2 98 4 99 8 100 16 102 2", "10"),
            Err(HuffmanError::TruncatedCode { consumed: 2 })
        );
    }

    #[test]
    fn invalid_bits_are_reported() {
        assert_eq!(
            decode("97 1 98 1", "01x"),
            Err(HuffmanError::InvalidBit { position: 2, found: 'x' })
        );
    }

    #[test]
    fn malformed_header_is_reported() {
        assert!(matches!(decode("97", "0"), Err(HuffmanError::MalformedHeader(_))));
    }

    #[test]
    fn decodes_known_code() {
        // a=0000 b=001 c=01 d=1 f=0001
        assert_eq!(decode("97 2 98 4 99 8 100 16 102 2", "10100100000001").unwrap(), b"dcbaf");
    }

    #[test]
    fn every_byte_value_round_trips() {
        let data: Vec<u8> = (0..=255u8).chain((0..=255u8).rev()).chain([0, 0, 0, 10, 13]).collect();
        let encoded = encode(&data);
        assert_eq!(decode(&encoded.header, &encoded.code).unwrap(), data);
    }
}
