// src/filtering/extension.rs

use std::path::Path;

/// Checks whether `path` has exactly the extension `ext`, ignoring case.
///
/// The comparison is on the whole final extension, so `cs` does not match
/// `View.cshtml` and `csproj` does not match `App.csproj.user`.
///
/// # Examples
///
/// ```
/// use slncat::filtering::has_extension;
/// use std::path::Path;
///
/// assert!(has_extension(Path::new("Models/Order.cs"), "cs"));
/// assert!(has_extension(Path::new("Models/Order.CS"), "cs"));
/// assert!(!has_extension(Path::new("Views/Index.cshtml"), "cs"));
/// assert!(!has_extension(Path::new("Makefile"), "cs"));
/// ```
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|os_str| os_str.to_str())
        .is_some_and(|actual| actual.eq_ignore_ascii_case(ext))
}
