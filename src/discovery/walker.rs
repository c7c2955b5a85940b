use crate::cancellation::CancellationToken;
use crate::errors::{Error, Result};
use log::trace;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Recursively lists every regular file below `root`, sorted by path.
///
/// Entries are sorted by file name inside each directory, which yields the
/// same order as sorting the full paths component by component. Symlinks are
/// not followed, but a symlink pointing at a file is listed.
///
/// # Errors
/// Returns `Error::Walk` on the first entry the walker cannot read (including a
/// missing `root`) and `Error::Interrupted` if `token` is cancelled.
pub(crate) fn walk_files(root: &Path, token: &CancellationToken) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        if token.is_cancelled() {
            return Err(Error::Interrupted);
        }
        let entry = entry.map_err(|source| Error::Walk {
            path: root.to_path_buf(),
            source,
        })?;
        if is_file_entry(&entry) {
            trace!("Walk yielded file: {}", entry.path().display());
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

#[inline]
fn is_file_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}
