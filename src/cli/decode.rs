use anyhow::{Context, Result};

use crate::algorithms::huffman::HuffmanCoding;
use crate::cli::{DecodeArgs, read_file, write_file};
use crate::compressor::Compressor;

pub fn decode(args: DecodeArgs) -> Result<()> {
    let input_path = &args.input;
    let output_path = &args.output;

    let encoded = read_file(input_path)?;
    let decoded = HuffmanCoding
        .decompress_bytes(&encoded)
        .with_context(|| format!("failed to decode {}", input_path.display()))?;
    if_tracing! {
        tracing::info!(event = "decode_complete", input = %input_path.display(), output = %output_path.display(), decoded_len = decoded.len(), "decode finished");
    }
    write_file(output_path, &decoded)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::EncodeArgs;
    use crate::cli::encode::encode;
    use tempfile::tempdir;
    use crate::compressor::HuffmanError;
    use std::fs;

    #[test]
    fn decodes_what_encode_wrote() {
        let dir = tempdir().unwrap();
        let original = "When in the Course of human events,\nit becomes necessary for one people\r\n";
        fs::write(dir.path().join("declaration.txt"), original).unwrap();

        encode(EncodeArgs {
            input: dir.path().join("declaration.txt"),
            output: dir.path().join("declaration_out.txt"),
        })
        .unwrap();
        decode(DecodeArgs {
            input: dir.path().join("declaration_out.txt"),
            output: dir.path().join("declaration_decode.txt"),
        })
        .unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("declaration_decode.txt")).unwrap(), original);
    }

    #[test]
    fn decodes_solution_with_crlf_line_ending() {
        let dir = tempdir().unwrap();
        // a=00 f=01 d=1
        fs::write(dir.path().join("soln.txt"), "97 1 100 2 102 1\r\n100101\r\n").unwrap();

        decode(DecodeArgs {
            input: dir.path().join("soln.txt"),
            output: dir.path().join("decoded.txt"),
        })
        .unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("decoded.txt")).unwrap(), "dadf");
    }

    #[test]
    fn single_char_and_empty_solutions() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("single_char_soln.txt"), "97 5").unwrap();
        fs::write(dir.path().join("empty_file.txt"), "").unwrap();

        decode(DecodeArgs {
            input: dir.path().join("single_char_soln.txt"),
            output: dir.path().join("single_char_decode.txt"),
        })
        .unwrap();
        decode(DecodeArgs {
            input: dir.path().join("empty_file.txt"),
            output: dir.path().join("empty_file_decode.txt"),
        })
        .unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("single_char_decode.txt")).unwrap(), "aaaaa");
        assert!(fs::read(dir.path().join("empty_file_decode.txt")).unwrap().is_empty());
    }

    #[test]
    fn truncated_code_surfaces_the_codec_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bad.txt"), "97 2 98 4 99 8 100 16 102 2\n000").unwrap();

        let err = decode(DecodeArgs {
            input: dir.path().join("bad.txt"),
            output: dir.path().join("out.txt"),
        })
        .unwrap_err();

        assert_eq!(
            err.root_cause().downcast_ref::<HuffmanError>(),
            Some(&HuffmanError::TruncatedCode { consumed: 3 })
        );
        assert!(!dir.path().join("out.txt").exists());
    }
}
