//! On-disk layout of an encoded file: the header line, then the code line.
//!
//! The line break between them is only written when both are non-empty, so a single-symbol
//! input produces a file holding just its header, and an empty input produces an empty file.

use crate::compressor::HuffmanError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodedFile {
    pub header: String,
    pub code: String,
}

impl EncodedFile {
    pub const fn new(header: String, code: String) -> Self {
        Self { header, code }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.header.len() + 1 + self.code.len());
        out.extend_from_slice(self.header.as_bytes());
        if !self.header.is_empty() && !self.code.is_empty() {
            out.push(b'\n');
        }
        out.extend_from_slice(self.code.as_bytes());
        out
    }

    /// Reads the header line and the code line back.
    ///
    /// Carriage returns before a line break are dropped, as is a line break after the code.
    ///
    /// # Errors
    ///
    /// Returns [`HuffmanError::MalformedHeader`] when the file is not valid UTF-8.
    pub fn parse(data: &[u8]) -> Result<Self, HuffmanError> {
        let text = core::str::from_utf8(data)
            .map_err(|e| HuffmanError::MalformedHeader(format!("encoded file is not valid UTF-8: {}", e)))?;

        let (header, code) = match text.split_once('\n') {
            None => (text, ""),
            Some((header, rest)) => (header, rest.lines().next().unwrap_or("")),
        };

        Ok(Self {
            header: header.trim_end_matches('\r').to_string(),
            code: code.to_string(),
        })
    }
}

/// Compares two texts line by line, ignoring whitespace around each line.
///
/// The shorter text is padded with blank lines, so trailing blank lines never count as a
/// difference. Returns the 1-based number of the first differing line, or `None` if the texts match.
pub fn lines_match(left: &str, right: &str) -> Option<usize> {
    let mut left_lines = left.lines().map(str::trim);
    let mut right_lines = right.lines().map(str::trim);
    let mut line_number = 0;

    loop {
        line_number += 1;
        match (left_lines.next(), right_lines.next()) {
            (None, None) => return None,
            (l, r) if l.unwrap_or("") != r.unwrap_or("") => return Some(line_number),
            _ => {}
        }
    }
}
