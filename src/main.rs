use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use hunter::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match hunter::cli::run_cli(args) {
        Ok(()) => ExitStatus::Success.into(),
        Err(err) => {
            eprintln!("{} {:#}", "error:".bold().red(), err);
            ExitStatus::Error.into()
        }
    }
}
