//! Defines core data structures used throughout the pipeline.
//!
//! A run discovers `ProjectDescriptor`s, selects a `FileBatch` per project and
//! watched extension, turns every `SourceFile` of a batch into a
//! `ProcessedFile`, and reports what it wrote through `BatchReport` and
//! `RunReport`.

use std::path::PathBuf;

/// A project found by its `*.csproj` manifest.
///
/// # Examples
///
/// ```
/// use slncat::core_types::ProjectDescriptor;
/// use std::path::PathBuf;
///
/// let project = ProjectDescriptor {
///     name: "Shop.Web".to_string(),
///     manifest_path: PathBuf::from("/src/Shop.Web/Shop.Web.csproj"),
///     folder_path: PathBuf::from("/src/Shop.Web"),
/// };
/// assert_eq!(project.name, "Shop.Web");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    /// The manifest file stem, used to name the dump files.
    pub name: String,
    /// Path to the manifest itself.
    pub manifest_path: PathBuf,
    /// The directory holding the manifest; every file below it belongs to the project.
    pub folder_path: PathBuf,
}

/// A source file selected for dumping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// The path on the filesystem, as produced by the walk.
    pub absolute_path: PathBuf,
    /// The path relative to the solution root.
    pub relative_path: PathBuf,
}

impl SourceFile {
    /// The file name shown in the block header.
    pub fn file_name(&self) -> String {
        self.absolute_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.relative_path.display().to_string())
    }
}

/// The files of one project with one watched extension, after exclusion filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBatch {
    /// Name of the owning project.
    pub project_name: String,
    /// The watched extension (`cs`, `cshtml` or `razor`).
    pub extension: String,
    /// Selected files, sorted by path.
    pub files: Vec<SourceFile>,
}

impl FileBatch {
    /// Name of the dump file for this batch: `{project}.{extension}.txt`.
    ///
    /// ```
    /// use slncat::core_types::FileBatch;
    ///
    /// let batch = FileBatch {
    ///     project_name: "Shop.Web".to_string(),
    ///     extension: "razor".to_string(),
    ///     files: Vec::new(),
    /// };
    /// assert_eq!(batch.output_file_name(), "Shop.Web.razor.txt");
    /// ```
    pub fn output_file_name(&self) -> String {
        format!("{}.{}.txt", self.project_name, self.extension)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// A source file after transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
    /// File name shown in the block header.
    pub file_name: String,
    /// The path relative to the solution root.
    pub relative_path: PathBuf,
    /// Transformed text; every kept line is terminated by `\n`.
    pub content: String,
    /// Token estimate of `content`.
    pub tokens: u64,
}

/// What one dump file received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Path of the dump file (written, or planned in dry-run mode).
    pub output_path: PathBuf,
    /// Number of file blocks in the dump.
    pub files: usize,
    /// Sum of the token estimates of those blocks.
    pub tokens: u64,
}

/// Outcome of a complete run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Dump files in creation order.
    pub batches: Vec<BatchReport>,
    /// Path of the sentinel file.
    pub sentinel_path: PathBuf,
    /// Token estimate over every processed file.
    pub total_tokens: u64,
}
