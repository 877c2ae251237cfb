use anyhow::Result;

use crate::cli::{CliError, CompareArgs, read_file};
use crate::format::lines_match;

pub fn compare(args: CompareArgs) -> Result<()> {
    let left = read_file(&args.left)?;
    let right = read_file(&args.right)?;

    match lines_match(&String::from_utf8_lossy(&left), &String::from_utf8_lossy(&right)) {
        None => {
            println!("{} and {} match", args.left.display(), args.right.display());
            Ok(())
        }
        Some(line) => Err(CliError::FilesDiffer {
            left: args.left,
            right: args.right,
            line,
        }
        .into()),
    }
}
