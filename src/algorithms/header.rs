//! Textual frequency header: `byte freq byte freq ...`, byte values ascending, single spaces.

use crate::algorithms::frequency::FrequencyTable;
use crate::compressor::HuffmanError;

/// Renders the present entries of `table`. An empty table renders as the empty string.
pub fn serialize_header(table: &FrequencyTable) -> String {
    table
        .symbols()
        .map(|symbol| format!("{} {}", symbol.byte, symbol.frequency))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses a header produced by [`serialize_header`].
///
/// Tokens may be separated by any ASCII whitespace, so a trailing line break is harmless.
/// Entries with a zero frequency are accepted and leave the byte absent.
///
/// # Errors
///
/// Returns [`HuffmanError::MalformedHeader`] on an odd token count, a token that is not a
/// decimal integer, a byte value above 255, a byte value listed twice, or frequencies whose
/// sum does not fit in a `u64`.
pub fn parse_header(header: &str) -> Result<FrequencyTable, HuffmanError> {
    let tokens: Vec<&str> = header.split_ascii_whitespace().collect();
    if tokens.len() % 2 != 0 {
        return Err(HuffmanError::MalformedHeader(format!(
            "expected byte/frequency pairs, found {} tokens",
            tokens.len()
        )));
    }

    let mut table = FrequencyTable::new();
    let mut seen = [false; 256];
    let mut total: u64 = 0;

    for pair in tokens.chunks_exact(2) {
        let value = parse_integer(pair[0])?;
        let frequency = parse_integer(pair[1])?;

        let byte = u8::try_from(value)
            .map_err(|_| HuffmanError::MalformedHeader(format!("byte value {} is out of range 0-255", value)))?;
        if seen[byte as usize] {
            return Err(HuffmanError::MalformedHeader(format!("byte value {} is listed twice", byte)));
        }
        seen[byte as usize] = true;

        total = total
            .checked_add(frequency)
            .ok_or_else(|| HuffmanError::MalformedHeader("total frequency overflows".to_string()))?;
        table.set(byte, frequency);
    }

    Ok(table)
}

fn parse_integer(token: &str) -> Result<u64, HuffmanError> {
    // `u64::from_str` would also take a leading '+'
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HuffmanError::MalformedHeader(format!("{:?} is not a non-negative integer", token)));
    }
    token
        .parse()
        .map_err(|_| HuffmanError::MalformedHeader(format!("{:?} does not fit in 64 bits", token)))
}
