// src/output/sentinel.rs

use crate::constants::SENTINEL_SUFFIX;
use crate::errors::{io_error_with_path, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the sentinel file: `{base}.{total}_Tokens.txt`.
///
/// ```
/// use slncat::output::sentinel_file_name;
///
/// assert_eq!(sentinel_file_name("Shop", 1234), "Shop.1234_Tokens.txt");
/// assert_eq!(sentinel_file_name("Solution", 0), "Solution.0_Tokens.txt");
/// ```
pub fn sentinel_file_name(base_name: &str, total_tokens: u64) -> String {
    format!("{}.{}{}", base_name, total_tokens, SENTINEL_SUFFIX)
}

/// Creates the empty sentinel file in `output_dir` and returns its path.
/// In dry-run mode only the path is computed.
///
/// # Errors
/// Returns `Error::Io` if the file cannot be written.
pub fn write_sentinel(
    output_dir: &Path,
    base_name: &str,
    total_tokens: u64,
    dry_run: bool,
) -> Result<PathBuf> {
    let path = output_dir.join(sentinel_file_name(base_name, total_tokens));
    if !dry_run {
        fs::write(&path, "").map_err(|e| io_error_with_path(e, &path))?;
        debug!("Wrote sentinel {}", path.display());
    }
    Ok(path)
}
