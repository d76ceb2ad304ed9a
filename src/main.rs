//! # dirsize
//!
//! A small CLI tool that computes the aggregate on-disk byte size of one or
//! more directories.
//!
//! The tool runs in a single synchronous pass: parse the command line, size
//! each requested directory in order, and print one result line per path.
//! By default only top-level files are counted; `--recursive` descends into
//! subdirectories, and `--human` renders sizes in binary units (KB/MB/GB)
//! instead of plain byte counts.
//!
//! ## Usage
//!
//! ```bash
//! # Top-level files only, plain byte counts
//! dirsize mydir
//!
//! # Full tree sizes in human-readable units
//! dirsize --human --recursive mydir anotherdir
//! ```

use std::env;
use std::process::exit;

use colored::Colorize;
use dirsize::args::{self, IncompleteArguments};
use dirsize::{output, size};

/// Entry point for the dirsize application.
///
/// Parses arguments, sizes every requested path, and prints the results.
/// A missing-arguments/help invocation prints the usage text; any processing
/// failure aborts the whole run with no partial output. Both exit with
/// status 1. All text, errors included, goes to stdout.
fn main() {
    let raw_args: Vec<String> = env::args().collect();

    let request = match args::parse(&raw_args) {
        Ok(request) => request,
        Err(IncompleteArguments) => {
            output::print_help();
            exit(1);
        }
    };

    match size::process_paths(&request) {
        Ok(results) => output::print_results(request.recursive, &results),
        Err(err) => {
            println!("{} {err}", "Error:".red());
            exit(1);
        }
    }
}
