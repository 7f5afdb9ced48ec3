use std::process::ExitCode;

use clap::Parser;
use locsheet::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    locsheet::cli::init_logging(args.verbose());

    match locsheet::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
