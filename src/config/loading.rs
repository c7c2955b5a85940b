// src/config/loading.rs

use super::Settings;
use crate::errors::{io_error_with_path, Error, Result};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk shape of the settings file. Unknown keys (logging sections and the
/// like) are ignored.
#[derive(Debug, Deserialize)]
struct RawSettings {
    #[serde(rename = "SolutionFolder", default)]
    solution_folder: Option<String>,
    #[serde(rename = "IgnoreFolders", default)]
    ignore_folders: Option<Vec<String>>,
}

/// Loads and checks the settings file at `path`.
///
/// Only two checks are made: the file must exist, and `SolutionFolder` must be
/// present and non-empty. `IgnoreFolders` defaults to an empty list.
///
/// # Errors
/// * `Error::ConfigMissing` if `path` is not a file.
/// * `Error::ConfigParse` if the content is not JSON of the expected shape.
/// * `Error::ConfigInvalid` if `SolutionFolder` is missing, `null` or empty.
/// * `Error::Io` if the file exists but cannot be read.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.is_file() {
        return Err(Error::ConfigMissing {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path).map_err(|e| io_error_with_path(e, path))?;
    let settings = parse_settings(&text, path)?;
    debug!(
        "Loaded settings from '{}': root '{}', {} ignore prefix(es)",
        path.display(),
        settings.root_path.display(),
        settings.ignore_patterns.len()
    );
    Ok(settings)
}

fn parse_settings(text: &str, path: &Path) -> Result<Settings> {
    let raw: RawSettings = serde_json::from_str(text).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    let root = match raw.solution_folder {
        Some(folder) if !folder.is_empty() => folder,
        _ => {
            return Err(Error::ConfigInvalid(format!(
                "SolutionFolder not specified in {}",
                path.display()
            )))
        }
    };

    Ok(Settings {
        root_path: PathBuf::from(root),
        ignore_patterns: raw.ignore_folders.unwrap_or_default(),
    })
}
