// src/output/mod.rs

//! Writes the dump files and the token-count sentinel.

use crate::cancellation::CancellationToken;
use crate::config::Config;
use crate::core_types::{BatchReport, FileBatch};
use crate::errors::{io_error_with_path, Error, Result};
use crate::processing::process_file;
use log::debug;
use tracing::instrument;

pub mod file_block;
pub mod sentinel;
pub mod writer;

pub use sentinel::{sentinel_file_name, write_sentinel};

/// Writes one dump file holding a block for every file of `batch`.
///
/// Files are processed in the batch's order. The dump is written to
/// `config.output_dir`, replacing any earlier file of the same name; in dry-run
/// mode the blocks are produced and counted but discarded.
///
/// # Errors
/// Returns `Error::Io` if a source file cannot be read or the dump cannot be
/// written, and `Error::Interrupted` if `token` is cancelled between files.
#[instrument(level = "debug", skip_all, fields(output = %batch.output_file_name()))]
pub fn write_batch(
    batch: &FileBatch,
    config: &Config,
    token: &CancellationToken,
) -> Result<BatchReport> {
    let output_path = config.output_dir.join(batch.output_file_name());
    let mut writer = writer::open_output(&output_path, config.dry_run)?;
    let mut tokens = 0u64;

    for file in &batch.files {
        if token.is_cancelled() {
            // The partial dump is flushed so it is not left truncated mid-block.
            writer::finalize_output(writer, &output_path)?;
            return Err(Error::Interrupted);
        }
        let processed = process_file(file)?;
        file_block::write_file_block(writer.as_mut(), &processed)
            .map_err(|e| io_error_with_path(e, &output_path))?;
        tokens += processed.tokens;
    }

    writer::finalize_output(writer, &output_path)?;
    debug!(
        "Finished {} with {} file(s), {} token(s)",
        output_path.display(),
        batch.files.len(),
        tokens
    );

    Ok(BatchReport {
        output_path,
        files: batch.files.len(),
        tokens,
    })
}
