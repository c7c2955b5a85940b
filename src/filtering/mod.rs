// src/filtering/mod.rs

//! Decides which files of a project end up in its dumps.
//!
//! The predicates are exposed individually so the selection rules can be
//! checked (and reused) without touching the filesystem.

mod exclusions;
mod extension;

pub use exclusions::{has_excluded_name, is_in_migrations_dir, matches_ignore_prefix};
pub use extension::has_extension;

use crate::config::Settings;
use crate::core_types::{FileBatch, ProjectDescriptor, SourceFile};
use log::{debug, trace, warn};
use std::path::{Path, PathBuf};

/// Selects the files of `project` with the given extension.
///
/// `candidates` is the listing of the project folder (see
/// `discovery::walk_files`); it is expected in path order and the batch keeps
/// that order. A candidate is kept when it lies below the project folder, has
/// the extension, and is not excluded by a `Migrations` directory, an
/// `Assembly`/`GlobalUsings` file name, or an ignore prefix (matched against
/// the path relative to the solution root).
///
/// # Examples
///
/// ```
/// use slncat::config::Settings;
/// use slncat::core_types::ProjectDescriptor;
/// use slncat::filtering::select_files;
/// use std::path::PathBuf;
///
/// let settings = Settings::new("/src");
/// let project = ProjectDescriptor {
///     name: "Shop".to_string(),
///     manifest_path: PathBuf::from("/src/Shop/Shop.csproj"),
///     folder_path: PathBuf::from("/src/Shop"),
/// };
/// let candidates = vec![
///     PathBuf::from("/src/Shop/Migrations/Init.cs"),
///     PathBuf::from("/src/Shop/Order.cs"),
///     PathBuf::from("/src/Shop/Properties/AssemblyInfo.cs"),
///     PathBuf::from("/src/Shop/Views/Index.cshtml"),
/// ];
///
/// let batch = select_files(&project, "cs", &candidates, &settings);
/// assert_eq!(batch.files.len(), 1);
/// assert_eq!(batch.files[0].relative_path, PathBuf::from("Shop/Order.cs"));
/// ```
pub fn select_files(
    project: &ProjectDescriptor,
    extension: &str,
    candidates: &[PathBuf],
    settings: &Settings,
) -> FileBatch {
    let files = candidates
        .iter()
        .filter(|path| path.starts_with(&project.folder_path))
        .filter(|path| has_extension(path, extension))
        .filter_map(|path| {
            let relative_path = relative_to_root(path, &settings.root_path);
            passes_exclusions(path, &relative_path, settings).then(|| SourceFile {
                absolute_path: path.clone(),
                relative_path,
            })
        })
        .collect::<Vec<_>>();

    debug!(
        "Project '{}': {} '.{}' file(s) selected",
        project.name,
        files.len(),
        extension
    );
    FileBatch {
        project_name: project.name.clone(),
        extension: extension.to_string(),
        files,
    }
}

fn passes_exclusions(path: &Path, relative_path: &Path, settings: &Settings) -> bool {
    if is_in_migrations_dir(relative_path) {
        trace!("Skipping migrations file: {}", relative_path.display());
        return false;
    }
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    if has_excluded_name(&file_name) {
        trace!("Skipping generated file: {}", relative_path.display());
        return false;
    }
    if matches_ignore_prefix(relative_path, &settings.ignore_patterns) {
        debug!("Skipping ignored path: {}", relative_path.display());
        return false;
    }
    true
}

fn relative_to_root(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|err| {
            warn!(
                "Failed to strip prefix '{}' from '{}': {}. Using full path.",
                root.display(),
                path.display(),
                err
            );
            path.to_path_buf()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(folder: &str) -> ProjectDescriptor {
        ProjectDescriptor {
            name: "Shop.Web".to_string(),
            manifest_path: PathBuf::from(folder).join("Shop.Web.csproj"),
            folder_path: PathBuf::from(folder),
        }
    }

    fn paths(list: &[&str]) -> Vec<PathBuf> {
        list.iter().map(PathBuf::from).collect()
    }

    fn relative(batch: &FileBatch) -> Vec<String> {
        batch
            .files
            .iter()
            .map(|f| f.relative_path.to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_extension_batches_are_disjoint() {
        let settings = Settings::new("/sln");
        let candidates = paths(&[
            "/sln/Web/Pages/Counter.razor",
            "/sln/Web/Program.cs",
            "/sln/Web/Views/Index.cshtml",
        ]);
        let project = project("/sln/Web");

        assert_eq!(
            relative(&select_files(&project, "cs", &candidates, &settings)),
            vec!["Web/Program.cs"]
        );
        assert_eq!(
            relative(&select_files(&project, "cshtml", &candidates, &settings)),
            vec!["Web/Views/Index.cshtml"]
        );
        assert_eq!(
            relative(&select_files(&project, "razor", &candidates, &settings)),
            vec!["Web/Pages/Counter.razor"]
        );
    }

    #[test]
    fn test_ignore_prefix_is_root_relative() {
        let mut settings = Settings::new("/sln");
        settings.ignore_patterns = vec!["web/generated".to_string()];
        let candidates = paths(&["/sln/Web/Generated/Client.cs", "/sln/Web/Program.cs"]);

        let batch = select_files(&project("/sln/Web"), "cs", &candidates, &settings);
        assert_eq!(relative(&batch), vec!["Web/Program.cs"]);
    }

    #[test]
    fn test_candidates_outside_project_are_dropped() {
        let settings = Settings::new("/sln");
        let candidates = paths(&["/sln/Other/Thing.cs", "/sln/Web/Program.cs"]);
        let batch = select_files(&project("/sln/Web"), "cs", &candidates, &settings);
        assert_eq!(relative(&batch), vec!["Web/Program.cs"]);
    }

    #[test]
    fn test_all_excluded_gives_empty_batch() {
        let settings = Settings::new("/sln");
        let candidates = paths(&[
            "/sln/Web/Migrations/Init.cs",
            "/sln/Web/GlobalUsings.cs",
            "/sln/Web/obj/Debug/Web.AssemblyInfo.cs",
        ]);
        let batch = select_files(&project("/sln/Web"), "cs", &candidates, &settings);
        assert!(batch.is_empty());
        assert_eq!(batch.output_file_name(), "Shop.Web.cs.txt");
    }
}
