//! Handles the processing stage of the `slncat` pipeline.
//!
//! Each selected source file is read, pushed through the filter chain
//! (comment stripping, then line filtering) and measured with the token
//! estimator.

use crate::core_types::{ProcessedFile, SourceFile};
use crate::errors::Result;
use log::debug;

mod content_reader;
mod counter;
pub mod filters;

pub use counter::estimate_tokens;
use content_reader::read_source_text;
use filters::default_filters;

/// Applies the full filter chain to raw file text.
///
/// # Examples
///
/// ```
/// use slncat::processing::transform_content;
///
/// let raw = "using System;\nnamespace App\n{\n    // comment\n    class Foo {}\n}\n";
/// assert_eq!(transform_content(raw), "    class Foo {}\n}\n");
/// ```
pub fn transform_content(raw: &str) -> String {
    default_filters()
        .iter()
        .fold(raw.to_string(), |content, filter| filter.apply(&content))
}

/// Reads, transforms and measures one source file.
///
/// # Errors
/// Returns `Error::Io` if the file cannot be read.
pub fn process_file(file: &SourceFile) -> Result<ProcessedFile> {
    debug!("Processing file: {}", file.absolute_path.display());
    let raw = read_source_text(&file.absolute_path)?;
    let content = transform_content(&raw);
    let tokens = estimate_tokens(&content);
    debug!(
        "Processed {}: {} -> {} bytes, {} token(s)",
        file.relative_path.display(),
        raw.len(),
        content.len(),
        tokens
    );

    Ok(ProcessedFile {
        file_name: file.file_name(),
        relative_path: file.relative_path.clone(),
        content,
        tokens,
    })
}
