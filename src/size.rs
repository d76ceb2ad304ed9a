//! Directory size aggregation and formatting.
//!
//! This module does the heavy lifting for each requested path: resolve it to
//! an absolute directory, walk its contents according to the recursive
//! policy using `walkdir`, sum the file sizes, and render the total either
//! as a plain byte count or in human-readable binary units.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow, bail};
use walkdir::WalkDir;

use crate::args::Request;

const UNIT: u64 = 1024;

/// GB is the largest supported unit; anything bigger still renders in GB.
const SUFFIXES: [&str; 3] = ["KB", "MB", "GB"];

/// Compute and format the size of every requested path, in request order.
///
/// Each raw path is resolved to an absolute path against the current working
/// directory, sized per the recursive flag, and rendered per the
/// human-readable flag. Results come back as ordered `(path, size)` pairs so
/// output order always matches input order.
///
/// # Errors
///
/// Fails fast: the first path that cannot be resolved, is not a directory,
/// or errors during traversal aborts the whole batch, and no partial results
/// are returned.
pub fn process_paths(request: &Request) -> Result<Vec<(PathBuf, String)>> {
    let mut results = Vec::with_capacity(request.paths.len());

    for path in &request.paths {
        let abs_path = std::path::absolute(path)
            .map_err(|e| anyhow!("failed to resolve path {path}: {e}"))?;
        let size = compute_size(&abs_path, request.recursive)?;

        let rendered = if request.human_readable {
            format_size(size)
        } else {
            size.to_string()
        };
        results.push((abs_path, rendered));
    }

    Ok(results)
}

/// Total the byte sizes of a directory's contents.
///
/// The root directory itself never contributes to the total. When
/// `recursive` is false only the immediate children are enumerated:
/// first-level subdirectories are seen but never descended into, so only
/// top-level files are counted. Directories contribute nothing at any depth;
/// every other entry contributes its own byte size.
///
/// # Errors
///
/// Fails if the path cannot be stat'd, exists but is not a directory, or if
/// any entry errors while walking (the whole per-path total is abandoned).
pub fn compute_size(path: &Path, recursive: bool) -> Result<u64> {
    let metadata =
        fs::metadata(path).map_err(|e| anyhow!("failed to stat {}: {e}", path.display()))?;
    if !metadata.is_dir() {
        bail!("not a directory: {}", path.display());
    }

    // min_depth(1) skips the root entry; capping at depth 1 enumerates
    // first-level entries without descending into subdirectories.
    let mut walker = WalkDir::new(path).min_depth(1);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut total = 0u64;
    for entry in walker {
        let entry =
            entry.map_err(|e| anyhow!("error walking directory {}: {e}", path.display()))?;
        if entry.file_type().is_dir() {
            continue;
        }

        let metadata = entry
            .metadata()
            .map_err(|e| anyhow!("error walking directory {}: {e}", path.display()))?;
        total += metadata.len();
    }

    Ok(total)
}

/// Render a byte count with a binary-unit suffix and two decimal places.
///
/// Sizes below 1024 bytes render as whole bytes (`"512 B"`); larger sizes
/// scale by 1024 into the largest applicable unit among KB, MB, and GB
/// (`"1.50 MB"`). GB is the cap, so multi-terabyte sizes render as large GB
/// values rather than introducing further units.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    if bytes < UNIT {
        return format!("{bytes} B");
    }

    let mut divisor = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT && exp < SUFFIXES.len() - 1 {
        divisor *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    #[allow(clippy::cast_precision_loss)]
    let scaled = bytes as f64 / divisor as f64;
    format!("{scaled:.2} {}", SUFFIXES[exp])
}
