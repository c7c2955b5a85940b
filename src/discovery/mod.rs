//! Discovers the projects of a solution tree and the files below them.
use crate::cancellation::CancellationToken;
use crate::constants::{PROJECT_MANIFEST_EXTENSION, TEST_PROJECT_MARKER};
use crate::core_types::ProjectDescriptor;
use crate::errors::Result;
use crate::filtering::has_extension;
use log::debug;
use std::path::Path;
use tracing::instrument;

mod solution;
mod walker;

pub use solution::solution_base_name;
pub(crate) use walker::walk_files;

/// Finds every `*.csproj` below `root` and describes the non-test projects.
///
/// A project is named after its manifest's file stem; a name containing
/// `test` in any casing marks a test project, which is skipped. Projects are
/// returned in path order.
///
/// # Errors
/// Returns an `Error` if the walk fails or is interrupted.
///
/// # Examples
///
/// ```
/// use slncat::{discover_projects, CancellationToken};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let root = tempdir().unwrap();
/// fs::create_dir_all(root.path().join("Shop.Web")).unwrap();
/// fs::create_dir_all(root.path().join("Shop.Tests")).unwrap();
/// fs::write(root.path().join("Shop.Web/Shop.Web.csproj"), "").unwrap();
/// fs::write(root.path().join("Shop.Tests/Shop.Tests.csproj"), "").unwrap();
///
/// let projects = discover_projects(root.path(), &CancellationToken::new()).unwrap();
/// assert_eq!(projects.len(), 1);
/// assert_eq!(projects[0].name, "Shop.Web");
/// ```
#[instrument(level = "debug", skip(token), fields(root = %root.display()))]
pub fn discover_projects(
    root: &Path,
    token: &CancellationToken,
) -> Result<Vec<ProjectDescriptor>> {
    let mut projects = Vec::new();

    for manifest_path in walk_files(root, token)? {
        if !has_extension(&manifest_path, PROJECT_MANIFEST_EXTENSION) {
            continue;
        }
        let Some(name) = manifest_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
        else {
            continue;
        };
        if is_test_project(&name) {
            debug!("Skipping test project: {}", manifest_path.display());
            continue;
        }

        let folder_path = manifest_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.to_path_buf());
        debug!("Found project '{}' in {}", name, folder_path.display());
        projects.push(ProjectDescriptor {
            name,
            manifest_path,
            folder_path,
        });
    }

    debug!("Discovery complete. Projects: {}", projects.len());
    Ok(projects)
}

/// Returns `true` if a project name marks a test project.
///
/// ```
/// use slncat::discovery::is_test_project;
///
/// assert!(is_test_project("Shop.UnitTests"));
/// assert!(is_test_project("TESTING.Helpers"));
/// assert!(!is_test_project("Shop.Web"));
/// ```
pub fn is_test_project(name: &str) -> bool {
    name.to_lowercase().contains(TEST_PROJECT_MARKER)
}
