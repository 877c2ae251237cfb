//! cli component of the huffcode project.
//!
//! lines starting with `> ` denote commands that are valid under the current implementation.
//! `$exename` stands for the executable name, which is `huffcode` in linux or `huffcode.exe` on windows.
//! `<description>` denotes a required argument, while `[description]` denotes an optional argument.
//!
//! # Encoding
//!
//! > `$exename enc <input path> <output path>`
//!
//! the input is read as raw bytes. the output holds the frequency header on the first line and the
//! code string on the second. the second line (and the line break before it) is left out when the
//! code string is empty, which happens for empty inputs and for inputs made of one repeated byte.
//!
//! # Decoding
//!
//! > `$exename dec <input path> <output path>`
//!
//! the header line is parsed, the trie is rebuilt from the frequencies alone, and the code line is
//! walked bit by bit. files whose line endings were rewritten to CRLF still decode.
//!
//! # Testing
//!
//! > `$exename test <input path> [--keep-failures <directory>] [--json]`
//!
//! encodes the input in memory, decodes it again and compares the result with the original.
//! on a mismatch, `<name>.expected.bin` and `<name>.got.bin` are written to the given directory.
//!
//! # Inspection
//!
//! > `$exename table <input path> [--encoded] [--json]`
//!
//! prints the header and the code of every byte present in the input. with `--encoded`, the input
//! is an encoded file and only its header line is used.
//!
//! > `$exename compare <left path> <right path>`
//!
//! compares two text files line by line, ignoring whitespace around each line. this is how
//! decoded fixtures are checked against their originals regardless of line endings.
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod compare;
pub mod decode;
pub mod encode;
pub mod table;

/// Error types for CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("roundtrip of {} did not reproduce the input", .path.display())]
    RoundTripMismatch { path: PathBuf },

    #[error("{} and {} differ at line {line}", .left.display(), .right.display())]
    FilesDiffer { left: PathBuf, right: PathBuf, line: usize },
}

/// CLI arguments for the huffcode application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands for huffcode
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a file into a frequency header and a code string
    #[command(alias = "enc")]
    Encode(EncodeArgs),

    /// Decode a file produced by `encode`
    #[command(alias = "dec")]
    Decode(DecodeArgs),

    /// Test encoding/decoding roundtrip
    Test(TestArgs),

    /// Print the frequency header and code table of a file
    Table(TableArgs),

    /// Compare two text files line by line, ignoring line endings
    Compare(CompareArgs),
}

/// Arguments specific to the encode command
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Path to the input file
    pub input: PathBuf,

    /// Path for the encoded output file
    pub output: PathBuf,
}

/// Arguments specific to the decode command
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Path to the encoded file
    pub input: PathBuf,

    /// Path for the decoded output file
    pub output: PathBuf,
}

/// Arguments specific to the test command
#[derive(Args, Debug)]
pub struct TestArgs {
    /// Path to the original file
    pub input: PathBuf,

    /// Directory receiving the expected and actual data when the roundtrip fails
    #[arg(long)]
    pub keep_failures: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments specific to the table command
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Path to the file to analyse
    pub input: PathBuf,

    /// Treat the input as an encoded file and read its header line
    #[arg(long)]
    pub encoded: bool,

    /// Print the table as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments specific to the compare command
#[derive(Args, Debug)]
pub struct CompareArgs {
    pub left: PathBuf,
    pub right: PathBuf,
}

pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>, CliError> {
    fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn write_file(path: &Path, data: &[u8]) -> Result<(), CliError> {
    fs::write(path, data).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}
