//! Command-line token parsing.
//!
//! `dirsize` deliberately uses a lenient, hand-rolled grammar rather than a
//! strict argument parser: any token containing `--` is treated as a flag,
//! unknown flags are accepted and silently ignored, and flags may interleave
//! with paths in any order. Preserve this leniency unless requirements change.

use std::error::Error;
use std::fmt;

/// A parsed invocation: flags plus the ordered list of raw paths.
///
/// Built once per run from the raw token list and immutable thereafter.
/// Paths are kept in the order they appeared, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Render sizes with binary-unit suffixes instead of plain byte counts.
    pub human_readable: bool,

    /// Descend into subdirectories instead of sizing only top-level files.
    pub recursive: bool,

    /// Raw, possibly relative, directory paths to size.
    pub paths: Vec<String>,
}

/// Returned when no directory paths were supplied or help was requested.
///
/// Not a true failure: the CLI routes this to the help text and exit code 1
/// rather than the generic error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncompleteArguments;

impl fmt::Display for IncompleteArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("missing arguments")
    }
}

impl Error for IncompleteArguments {}

/// Parse the raw command-line token list into a [`Request`].
///
/// The first token is taken to be the program name and is skipped. Of the
/// remaining tokens, anything containing `--` is a flag (`--human`,
/// `--recursive`, anything else ignored) and everything else is a path.
///
/// # Errors
///
/// Returns [`IncompleteArguments`] when there are no tokens after the program
/// name, when the first token is exactly `--help`, or when no path-bearing
/// tokens remain after flag extraction.
pub fn parse(args: &[String]) -> Result<Request, IncompleteArguments> {
    let Some((_program, tokens)) = args.split_first() else {
        return Err(IncompleteArguments);
    };

    if tokens.is_empty() || tokens[0] == "--help" {
        return Err(IncompleteArguments);
    }

    let mut request = Request {
        human_readable: false,
        recursive: false,
        paths: Vec::new(),
    };

    for token in tokens {
        if token.contains("--") {
            match token.split("--").nth(1) {
                Some("human") => request.human_readable = true,
                Some("recursive") => request.recursive = true,
                // Unknown flags are accepted and ignored.
                _ => {}
            }
        } else {
            request.paths.push(token.clone());
        }
    }

    if request.paths.is_empty() {
        return Err(IncompleteArguments);
    }

    Ok(request)
}
