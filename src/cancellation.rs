//! Provides a token-based mechanism for graceful cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable flag that the pipeline polls between files and projects.
///
/// The Ctrl+C handler holds a clone and flips it; the running pipeline
/// notices on its next check and stops with `Error::Interrupted`.
///
/// # Examples
///
/// ```
/// use slncat::CancellationToken;
///
/// let token = CancellationToken::new();
/// let handler_side = token.clone();
/// assert!(!token.is_cancelled());
///
/// handler_side.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    inner: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a new token in the non-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals cancellation to every clone of this token.
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::SeqCst);
    }

    /// Returns `true` once `cancel()` has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }
}
