use anyhow::Result;

use crate::algorithms::huffman::HuffmanCoding;
use crate::cli::{EncodeArgs, read_file, write_file};
use crate::compressor::Compressor;

pub fn encode(args: EncodeArgs) -> Result<()> {
    let input_path = &args.input;
    let output_path = &args.output;

    let input_data = read_file(input_path)?;
    let encoded = HuffmanCoding.compress_bytes(&input_data);
    if_tracing! {
        tracing::info!(event = "encode_complete", input = %input_path.display(), output = %output_path.display(), input_len = input_data.len(), encoded_len = encoded.len(), "encode finished");
    }
    write_file(output_path, &encoded)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliError;
    use tempfile::tempdir;
    use std::fs;

    #[test]
    fn writes_header_and_code_lines() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("file2.txt");
        let output = dir.path().join("file2_out.txt");
        fs::write(&input, "ddddddddddddddddccccccccbbbbaaff").unwrap();

        encode(EncodeArgs {
            input,
            output: output.clone(),
        })
        .unwrap();

        let written = fs::read_to_string(&output).unwrap();
        let (header, code) = written.split_once('\n').unwrap();
        assert_eq!(header, "97 2 98 4 99 8 100 16 102 2");
        assert_eq!(code.len(), 60);
    }

    #[test]
    fn single_char_file_holds_only_the_header() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("single_char.txt");
        let output = dir.path().join("single_char_out.txt");
        fs::write(&input, "aaaaa").unwrap();

        encode(EncodeArgs {
            input,
            output: output.clone(),
        })
        .unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "97 5");
    }

    #[test]
    fn empty_file_encodes_to_empty_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty_file.txt");
        let output = dir.path().join("empty_file_out.txt");
        fs::write(&input, "").unwrap();

        encode(EncodeArgs {
            input,
            output: output.clone(),
        })
        .unwrap();
        assert!(fs::read(&output).unwrap().is_empty());
    }

    #[test]
    fn missing_input_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = encode(EncodeArgs {
            input: dir.path().join("doesnotexist.txt"),
            output: dir.path().join("no_output.txt"),
        })
        .unwrap_err();

        assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::Read { .. })));
        assert!(!dir.path().join("no_output.txt").exists());
    }
}
