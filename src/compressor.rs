pub use anyhow::Result;
use thiserror::Error;

/// Represents an error emitted by the Huffman coder while parsing a header or decoding a code string.
///
/// Every variant is final: the coder is deterministic, so the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuffmanError {
    /// The frequency header could not be parsed.
    ///
    /// The argument describes what went wrong.
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// The code string ended in the middle of a path through the trie.
    #[error("code string ends mid-symbol after {consumed} bits")]
    TruncatedCode { consumed: usize },

    /// The code string contained something other than `'0'` or `'1'`.
    #[error("invalid bit {found:?} at position {position} in code string")]
    InvalidBit { position: usize, found: char },

    /// A single-symbol header was paired with a non-empty code string.
    #[error("single-symbol header admits no code bits, found {0}")]
    UnexpectedBits(usize),

    /// A single-symbol header asks for more output than can be allocated.
    #[error("cannot allocate {0} bytes of decoded output")]
    OutputTooLarge(u64),
}

/// Represents shared behavior for all compressors.
///
/// Provides a method [`compress_bytes`](Compressor::compress_bytes) to compress data and
/// [`decompress_bytes`](Compressor::decompress_bytes) to decompress data.
///
/// # Note
///
/// No guarantees are made about the length of the resulting [`Vec<u8>`] from
/// [`compress_bytes`](Compressor::compress_bytes). The textual Huffman coder in particular
/// usually produces output larger than its input, since every bit is spelled out as a digit.
/// The only guarantee is that [`decompress_bytes`](Compressor::decompress_bytes) will be able to
/// reconstruct the original data.
pub trait Compressor: 'static {
    /// Compresses a given byte slice and returns the encoded data.
    ///
    /// Decoding the resulting [`Vec<u8>`] will always provide the original data.
    fn compress_bytes(&mut self, data: &[u8]) -> Vec<u8>;

    /// Decompresses a given byte slice and returns the decoded data.
    ///
    /// # Errors
    ///
    /// Returns an error if the input data was malformed.
    fn decompress_bytes(&mut self, data: &[u8]) -> Result<Vec<u8>>;

    /// Returns the name of the compressor algorithm.
    /// Use for debugging purposes.
    ///
    /// Defaults to the type name of the compressor.
    fn compressor_name(&self) -> String {
        core::any::type_name::<Self>().to_string()
    }

    /// Performs a round-trip test on the compressor.
    ///
    /// Use for sanity checking the compressor and decompressor.
    fn test_roundtrip<'orig>(&mut self, data: &'orig [u8]) -> Result<RoundTripTestResult<'orig>> {
        let compressed = <Self as Compressor>::compress_bytes(self, data);
        let decompressed = <Self as Compressor>::decompress_bytes(self, &compressed)?;
        let equal = data == decompressed.as_slice();

        Ok(RoundTripTestResult {
            equal,
            original: data,
            compressed,
            decompressed,
        })
    }
}

/// Represents the result of a round-trip test.
///
/// Use accessor methods to retrieve the [`result`][RoundTripTestResult::is_successful],
/// the [`original data`][RoundTripTestResult::get_original],
/// the [`compressed data`][RoundTripTestResult::get_compressed],
/// and the [`decompressed data`][RoundTripTestResult::get_decompressed].
#[derive(Clone, Debug, Hash)]
pub struct RoundTripTestResult<'orig> {
    pub(crate) equal: bool,
    pub(crate) original: &'orig [u8],
    pub(crate) compressed: Vec<u8>,
    pub(crate) decompressed: Vec<u8>,
}

impl<'orig> RoundTripTestResult<'orig> {
    /// Whether the original and decompressed data were equal.
    pub const fn is_successful(&self) -> bool {
        self.equal
    }

    /// The original data before any action was taken.
    pub const fn get_original(&self) -> &'orig [u8] {
        self.original
    }

    /// The data after it has been encoded by the compressor.
    pub fn get_compressed(&self) -> &[u8] {
        self.compressed.as_slice()
    }

    /// The data after it has been decoded by the decompressor.
    pub fn get_decompressed(&self) -> &[u8] {
        self.decompressed.as_slice()
    }

    /// Size of the encoded data relative to the original, `0.0` for empty input.
    pub fn ratio(&self) -> f64 {
        if self.original.is_empty() {
            return 0.0;
        }
        self.compressed.len() as f64 / self.original.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_failure() {
        let err = HuffmanError::MalformedHeader("odd token count".to_string());
        assert_eq!(err.to_string(), "malformed header: odd token count");

        let err = HuffmanError::TruncatedCode { consumed: 3 };
        assert_eq!(err.to_string(), "code string ends mid-symbol after 3 bits");

        let err = HuffmanError::InvalidBit { position: 4, found: '2' };
        assert_eq!(err.to_string(), "invalid bit '2' at position 4 in code string");

        let err = HuffmanError::OutputTooLarge(1 << 40);
        assert_eq!(err.to_string(), "cannot allocate 1099511627776 bytes of decoded output");
    }
}
