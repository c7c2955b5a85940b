// src/processing/content_reader.rs

use crate::errors::{io_error_with_path, Result};
use std::{fs, path::Path};

const UTF8_BOM: char = '\u{feff}';

/// Reads a source file as text.
///
/// Invalid UTF-8 is replaced lossily and a leading byte-order mark is dropped,
/// so the first line of a BOM-prefixed file trims like any other.
pub(super) fn read_source_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| io_error_with_path(e, path))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(match text.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_string(),
        None => text.into_owned(),
    })
}
