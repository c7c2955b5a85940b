use super::{loading::load_settings, Config, Settings};
use crate::cli::Cli;
use crate::constants::DEFAULT_CONFIG_FILE;
use crate::errors::Result;
use std::path::PathBuf;

/// Builds a [`Config`] from CLI arguments or programmatically.
///
/// Settings either come from a JSON file (`config_file`, the default being
/// `appsettings.json` in the working directory) or are supplied directly with
/// `settings`, which skips the file entirely.
///
/// # Examples
///
/// ```
/// use slncat::config::{ConfigBuilder, Settings};
///
/// let config = ConfigBuilder::new()
///     .settings(Settings::new("src/Shop"))
///     .output_dir("dumps")
///     .dry_run(true)
///     .build()
///     .unwrap();
///
/// assert!(config.dry_run);
/// assert_eq!(config.output_dir.to_str(), Some("dumps"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config_file: PathBuf,
    settings: Option<Settings>,
    output_dir: PathBuf,
    dry_run: bool,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            settings: None,
            output_dir: PathBuf::from("."),
            dry_run: false,
        }
    }
}

impl ConfigBuilder {
    /// Creates a builder with the defaults: `appsettings.json`, output into
    /// the working directory, files written.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from parsed CLI arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            config_file: cli.config,
            settings: None,
            output_dir: cli.output_dir,
            dry_run: cli.dry_run,
        }
    }

    /// Sets the settings file to load.
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = path.into();
        self
    }

    /// Supplies settings directly instead of loading them from a file.
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Sets the directory receiving the dump files and the sentinel.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Enables or disables dry-run mode.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Loads the settings (unless supplied) and assembles the final `Config`.
    ///
    /// # Errors
    /// Propagates the configuration errors of [`load_settings`].
    pub fn build(self) -> Result<Config> {
        let settings = match self.settings {
            Some(settings) => settings,
            None => load_settings(&self.config_file)?,
        };
        Ok(Config {
            settings,
            output_dir: self.output_dir,
            dry_run: self.dry_run,
        })
    }
}
