//! Defines the `Config` context threaded through every pipeline stage.
//!
//! Settings come from a JSON file (`SolutionFolder`, `IgnoreFolders`); the CLI
//! adds where to write and whether to write at all. Once built, a `Config` is
//! immutable and passed by reference.

use std::path::PathBuf;

pub use builder::ConfigBuilder;
pub use loading::load_settings;

mod builder;
mod loading;

/// Values read from the settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Root of the solution tree (`SolutionFolder`). Never empty.
    pub root_path: PathBuf,
    /// Root-relative path prefixes to skip (`IgnoreFolders`), matched
    /// case-insensitively. Empty when the setting is absent.
    pub ignore_patterns: Vec<String>,
}

impl Settings {
    /// Creates settings for `root_path` with no ignore prefixes.
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            ignore_patterns: Vec::new(),
        }
    }
}

/// Run-wide configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Values from the settings file.
    pub settings: Settings,
    /// Directory receiving the dump files and the sentinel.
    pub output_dir: PathBuf,
    /// If `true`, compute everything but write no files.
    pub dry_run: bool,
}

impl Config {
    /// Creates a `Config` for tests and doc tests: the given root, no ignore
    /// prefixes, output into `output_dir`.
    #[doc(hidden)]
    pub fn new_for_test(root_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            settings: Settings::new(root_path),
            output_dir: output_dir.into(),
            dry_run: false,
        }
    }
}
