// src/filtering/exclusions.rs

use crate::constants::{EXCLUDED_FILE_NAME_MARKERS, MIGRATIONS_DIR_NAME};
use std::path::{Component, Path};

/// Checks if any directory segment of `relative_path` is `Migrations`
/// (case-insensitive). The file name itself is not a directory segment.
pub fn is_in_migrations_dir(relative_path: &Path) -> bool {
    let Some(parent) = relative_path.parent() else {
        return false;
    };
    parent.components().any(|component| match component {
        Component::Normal(segment) => segment
            .to_str()
            .is_some_and(|s| s.eq_ignore_ascii_case(MIGRATIONS_DIR_NAME)),
        _ => false,
    })
}

/// Checks if a file name contains `Assembly` or `GlobalUsings` (case-insensitive).
pub fn has_excluded_name(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    EXCLUDED_FILE_NAME_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
}

/// Checks if `relative_path` starts with one of the ignore prefixes.
///
/// Both sides are compared lowercase with `/` separators; a prefix's leading
/// `./` or `/` is dropped. Matching is textual, so the prefix `Tools` also
/// matches `ToolsOld/Gen.cs`. Empty prefixes never match.
///
/// # Examples
///
/// ```
/// use slncat::filtering::matches_ignore_prefix;
/// use std::path::Path;
///
/// let ignore = vec!["legacy".to_string(), "./Shop.Web/wwwroot".to_string()];
/// assert!(matches_ignore_prefix(Path::new("Legacy/Old.cs"), &ignore));
/// assert!(matches_ignore_prefix(Path::new("Shop.Web/wwwroot/lib/x.cs"), &ignore));
/// assert!(!matches_ignore_prefix(Path::new("Shop.Web/Program.cs"), &ignore));
/// ```
pub fn matches_ignore_prefix(relative_path: &Path, ignore_patterns: &[String]) -> bool {
    if ignore_patterns.is_empty() {
        return false;
    }
    let relative = normalize_for_prefix(&relative_path.to_string_lossy());
    ignore_patterns.iter().any(|pattern| {
        let prefix = normalize_for_prefix(pattern);
        !prefix.is_empty() && relative.starts_with(&prefix)
    })
}

fn normalize_for_prefix(path: &str) -> String {
    let unified = path.replace('\\', "/").to_lowercase();
    let mut trimmed = unified.as_str();
    loop {
        if let Some(rest) = trimmed.strip_prefix("./") {
            trimmed = rest;
        } else if let Some(rest) = trimmed.strip_prefix('/') {
            trimmed = rest;
        } else {
            break;
        }
    }
    trimmed.to_string()
}
