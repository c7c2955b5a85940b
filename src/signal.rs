// src/signal.rs

//! Provides signal handling for graceful shutdown.

use crate::cancellation::CancellationToken;
use anyhow::{Context, Result};

/// Sets up a handler for Ctrl+C (SIGINT).
///
/// The returned token is cancelled when the signal is caught. The pipeline
/// checks it between files, so a half-written dump is closed before the run
/// stops.
///
/// # Errors
/// Returns an error if the signal handler cannot be set.
pub fn setup_signal_handler() -> Result<CancellationToken> {
    let token = CancellationToken::new();
    let handler_token = token.clone();

    ctrlc::set_handler(move || {
        log::info!("Ctrl+C signal received, attempting graceful shutdown.");
        handler_token.cancel();
    })
    .context("Failed to set Ctrl+C signal handler")?;

    Ok(token)
}
