#[macro_export]
macro_rules! if_tracing {
    {$($body:tt)*} => {
        ::cfg_if::cfg_if! {
            if #[cfg(feature = "tracing")] {
                $($body)*
            }
        }
    };
}

if_tracing! {
    use tracing_subscriber::{EnvFilter, fmt};
}

use std::process::ExitCode;

use crate::cli::{Cli, Command};
use clap::Parser;

mod algorithms;
mod cli;
mod compressor;
mod format;


fn main() -> ExitCode {
    if_tracing! {
        let subscriber = fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Encode(args) => cli::encode::encode(args),
        Command::Decode(args) => cli::decode::decode(args),
        Command::Test(args) => cli::test::test(args),
        Command::Table(args) => cli::table::table(args),
        Command::Compare(args) => cli::compare::compare(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if_tracing! {
                tracing::error!(event = "command_failed", error = %e, "command failed");
            }
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
