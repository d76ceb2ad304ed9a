//! Help text and result rendering.
//!
//! Everything `dirsize` prints goes to stdout, including errors; the binary
//! is the only caller. Colorization is cosmetic and is disabled
//! automatically when stdout is not a terminal.

use std::path::PathBuf;

use colored::Colorize;

/// Print the usage text shown for `--help` or an empty invocation.
pub fn print_help() {
    println!();
    println!("{}", "--- Dirsize Help ---".bold());
    println!("Dirsize accepts a list of directory paths and returns their size.");
    println!();
    println!("Usage: dirsize [options] <dir1> <dir2> ...");
    println!();
    println!("Options:");
    println!("  --help        Display this help content.");
    println!("  --recursive   Include subdirectories in the total size.");
    println!("  --human       Display sizes in human-readable format (KB, MB, GB).");
    println!();
    println!("Example:");
    println!("  dirsize --human --recursive mydir anotherdir");
    println!();
}

/// Print one `<path>: <size>` line per result, in order.
///
/// When recursion was enabled, a notice line precedes the results.
pub fn print_results(recursive: bool, results: &[(PathBuf, String)]) {
    if recursive {
        println!("(Recursive enabled)");
    }

    for (path, size) in results {
        println!("{}: {size}", path.display());
    }
}
