// src/output/writer.rs

//! Opens and closes the destination of one dump file.
//!
//! A real run writes through a `BufWriter<File>`; a dry run writes into
//! `io::sink()` so the same formatting code runs without touching the disk.

use crate::errors::{io_error_with_path, Result};
use log::debug;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Creates the writer for `path`, or a sink when `dry_run` is set.
///
/// # Errors
/// Returns `Error::Io` if the file cannot be created.
pub fn open_output(path: &Path, dry_run: bool) -> Result<Box<dyn Write>> {
    if dry_run {
        debug!("Dry run: discarding output for {}", path.display());
        return Ok(Box::new(io::sink()));
    }
    let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Flushes and closes a writer returned by [`open_output`].
///
/// # Errors
/// Returns `Error::Io` if buffered data cannot be written out.
pub fn finalize_output(mut writer: Box<dyn Write>, path: &Path) -> Result<()> {
    writer.flush().map_err(|e| io_error_with_path(e, path))?;
    // Dropping the writer closes the file.
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_output_round_trip() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("Shop.cs.txt");

        let mut writer = open_output(&path, false)?;
        write!(writer, "Test content")?;
        finalize_output(writer, &path)?;

        assert_eq!(fs::read_to_string(&path)?, "Test content");
        Ok(())
    }

    #[test]
    fn test_dry_run_creates_nothing() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("Shop.cs.txt");

        let mut writer = open_output(&path, true)?;
        write!(writer, "discarded")?;
        finalize_output(writer, &path)?;

        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing/Shop.cs.txt");
        assert!(open_output(&path, false).is_err());
    }
}
