//! Defines application-specific error types.
//!
//! The `Error` enum separates the two user-facing precondition failures
//! (configuration missing or invalid) from the I/O failures that abort a run.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the `slncat` pipeline.
#[derive(Error, Debug)]
pub enum Error {
    // --- Configuration Errors ---
    /// The settings file does not exist.
    #[error("Configuration file not found: '{}'", path.display())]
    ConfigMissing {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// A required setting is missing or empty.
    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    /// The settings file is not valid JSON or a field has the wrong type.
    #[error("Failed to parse configuration file '{}': {source}", path.display())]
    ConfigParse {
        /// The settings file that failed to parse.
        path: PathBuf,
        /// The underlying `serde_json::Error`.
        #[source]
        source: serde_json::Error,
    },

    // --- I/O Errors ---
    /// Error occurring during file or directory access (read, write, create).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Error raised by the directory walker (permissions, broken entries).
    #[error("Failed to walk directory '{}': {source}", path.display())]
    Walk {
        /// The directory being walked.
        path: PathBuf,
        /// The underlying `walkdir::Error`.
        #[source]
        source: walkdir::Error,
    },

    // --- Signal Handling ---
    /// The operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,
}

impl Error {
    /// Returns `true` for the errors that are reported as configuration
    /// diagnostics rather than runtime failures.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::ConfigMissing { .. } | Error::ConfigInvalid(_) | Error::ConfigParse { .. }
        )
    }
}

/// A specialized `Result` type for `slncat` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an `Error::Io` with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
