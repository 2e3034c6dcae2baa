//! Binary entry point for literate-rs.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::Parser;
use literate_rs::cli::output::{OutputFormat, format_error};
use literate_rs::cli::{Cli, execute};
use literate_rs::{Error, logging};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let format = OutputFormat::parse(&cli.format);

    match execute(&cli) {
        Ok(summary) => print_summary(&summary),
        Err(e) => {
            report_failure(&e, format);
            ExitCode::FAILURE
        }
    }
}

/// Prints the conversion summary. A reader that closed stdout early is
/// not a failure.
fn print_summary(summary: &str) -> ExitCode {
    let mut stdout = io::stdout().lock();
    match stdout.write_all(summary.as_bytes()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: cannot print summary: {e}");
            ExitCode::FAILURE
        }
    }
}

/// JSON callers read failures from stdout alongside regular results; text
/// failures go to stderr.
fn report_failure(error: &Error, format: OutputFormat) {
    let message = format_error(error, format);
    if format == OutputFormat::Json {
        println!("{message}");
    } else {
        eprintln!("Error: {message}");
    }
}
