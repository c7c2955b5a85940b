// src/discovery/solution.rs

use crate::constants::{FALLBACK_SOLUTION_NAME, SOLUTION_MANIFEST_EXTENSION};
use crate::errors::{io_error_with_path, Result};
use crate::filtering::has_extension;
use log::debug;
use std::fs;
use std::path::Path;

/// Derives the sentinel base name from the first `*.sln` directly in `root`.
///
/// Candidates are sorted by name; without any, the name is `Solution`.
///
/// # Errors
/// Returns `Error::Io` if `root` cannot be listed.
pub fn solution_base_name(root: &Path) -> Result<String> {
    let mut candidates = Vec::new();
    for entry in fs::read_dir(root).map_err(|e| io_error_with_path(e, root))? {
        let path = entry.map_err(|e| io_error_with_path(e, root))?.path();
        if path.is_file() && has_extension(&path, SOLUTION_MANIFEST_EXTENSION) {
            candidates.push(path);
        }
    }
    candidates.sort();

    let name = candidates
        .first()
        .and_then(|path| path.file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_SOLUTION_NAME.to_string());
    debug!("Solution base name: {}", name);
    Ok(name)
}
