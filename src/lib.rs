//! Core library for the `dirsize` CLI tool.
//!
//! The crate is split into two small components composed linearly:
//!
//! - [`args`] parses the raw command-line token list into a [`Request`]
//!   (human-readable flag, recursive flag, ordered path list).
//! - [`size`] resolves each requested path to an absolute directory, walks it
//!   according to the recursive policy, sums file sizes, and formats each sum.
//!
//! [`output`] holds the thin rendering layer (help text, result lines) used
//! by the binary.

pub mod args;
pub mod output;
pub mod size;

pub use args::{IncompleteArguments, Request};
