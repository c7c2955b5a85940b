//! `slncat` is a library and command-line tool that flattens the projects of a
//! .NET solution into plain-text dumps sized for Large Language Model context
//! windows.
//!
//! For every non-test `*.csproj` below the configured solution folder it
//! writes one `{Project}.{ext}.txt` per source type (`cs`, `cshtml`, `razor`),
//! with comments, using-directives and namespace wrappers removed. The sum of
//! the per-file token estimates is published as the name of an empty
//! `{Solution}.{N}_Tokens.txt` file.
//!
//! The pipeline is split into stages usable on their own:
//! 1.  **Discover**: find the projects ([`discover_projects`]).
//! 2.  **Select**: pick each project's files per extension ([`select_files`]).
//! 3.  **Transform**: strip the noise from a file ([`transform_content`]) and
//!     estimate its tokens ([`estimate_tokens`]).
//! 4.  **Write**: emit the dumps and the sentinel ([`output`]).
//!
//! # Example: Library Usage
//!
//! ```
//! use slncat::{run, CancellationToken, Config};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. A solution with one project.
//! let root = tempdir().unwrap();
//! let out = tempdir().unwrap();
//! fs::create_dir_all(root.path().join("App")).unwrap();
//! fs::write(root.path().join("App/App.csproj"), "<Project />").unwrap();
//! fs::write(
//!     root.path().join("App/Foo.cs"),
//!     "using System;\nnamespace App\n{\n    // comment\n    class Foo {}\n}\n",
//! )
//! .unwrap();
//!
//! // 2. Run the pipeline, collecting progress lines in memory.
//! let config = Config::new_for_test(root.path(), out.path());
//! let mut progress = Vec::new();
//! let report = run(&config, &CancellationToken::new(), &mut progress).unwrap();
//!
//! // 3. One dump and the sentinel were written.
//! assert_eq!(report.total_tokens, 6);
//! assert!(out.path().join("App.cs.txt").is_file());
//! assert!(out.path().join("Solution.6_Tokens.txt").is_file());
//! assert_eq!(
//!     String::from_utf8(progress).unwrap(),
//!     "Created App.cs.txt\nCreated token count file: Solution.6_Tokens.txt\n"
//! );
//! ```

pub mod cancellation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod prelude;
pub mod processing;
pub mod signal;

// Re-export key public types for easier use as a library
pub use cancellation::CancellationToken;
pub use config::{Config, ConfigBuilder, Settings};
pub use core_types::{
    BatchReport, FileBatch, ProcessedFile, ProjectDescriptor, RunReport, SourceFile,
};
pub use discovery::discover_projects;
pub use errors::{Error, Result};
pub use filtering::select_files;
pub use processing::{estimate_tokens, transform_content};

use crate::constants::WATCHED_EXTENSIONS;
use crate::errors::io_error_with_path;
use log::{debug, info};
use std::fs;
use std::io::Write;

const PROGRESS_STREAM: &str = "<progress>";

/// Executes the complete pipeline: discover, select, transform, write.
///
/// Each written dump is announced on `progress` as `Created {file}` and the
/// sentinel as `Created token count file: {file}`. In dry-run mode the same
/// lines read `Would create ...` and nothing is written.
///
/// The first error aborts the run; dumps already written stay on disk and no
/// sentinel is created.
///
/// # Errors
/// Returns `Error::Walk` or `Error::Io` on filesystem failures and
/// `Error::Interrupted` if `token` is cancelled.
pub fn run(
    config: &Config,
    token: &CancellationToken,
    progress: &mut dyn Write,
) -> Result<RunReport> {
    let root = &config.settings.root_path;
    info!("Processing solution at {}", root.display());

    let projects = discover_projects(root, token)?;
    debug!("Found {} project(s)", projects.len());

    if !config.dry_run {
        fs::create_dir_all(&config.output_dir)
            .map_err(|e| io_error_with_path(e, &config.output_dir))?;
    }
    let verb = if config.dry_run { "Would create" } else { "Created" };

    let mut report = RunReport::default();
    for project in &projects {
        let candidates = discovery::walk_files(&project.folder_path, token)?;

        for extension in WATCHED_EXTENSIONS {
            let batch = select_files(project, extension, &candidates, &config.settings);
            if batch.is_empty() {
                debug!("No .{} files in {}", extension, project.name);
                continue;
            }

            let batch_report = output::write_batch(&batch, config, token)?;
            writeln!(progress, "{} {}", verb, batch.output_file_name())
                .map_err(|e| io_error_with_path(e, PROGRESS_STREAM))?;
            report.total_tokens += batch_report.tokens;
            report.batches.push(batch_report);
        }
    }

    let base_name = discovery::solution_base_name(root)?;
    report.sentinel_path = output::write_sentinel(
        &config.output_dir,
        &base_name,
        report.total_tokens,
        config.dry_run,
    )?;
    writeln!(
        progress,
        "{} token count file: {}",
        verb,
        output::sentinel_file_name(&base_name, report.total_tokens)
    )
    .map_err(|e| io_error_with_path(e, PROGRESS_STREAM))?;

    info!(
        "Wrote {} dump(s), {} token(s) in total",
        report.batches.len(),
        report.total_tokens
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_run_basic_success() -> anyhow::Result<()> {
        let root = tempdir()?;
        let out = tempdir()?;
        write(root.path(), "Shop.sln", "");
        write(root.path(), "Web/Web.csproj", "");
        write(root.path(), "Web/Home.cs", "class Home {}\n");
        write(root.path(), "Web/Index.cshtml", "<h1>Hi</h1>\n");

        let config = Config::new_for_test(root.path(), out.path());
        let mut progress = Vec::new();
        let report = run(&config, &CancellationToken::new(), &mut progress)?;

        // "class Home {}\n" is 14 chars -> 5; "<h1>Hi</h1>\n" is 12 chars -> 4.
        assert_eq!(report.total_tokens, 9);
        assert_eq!(report.batches.len(), 2);
        assert_eq!(report.sentinel_path, out.path().join("Shop.9_Tokens.txt"));
        assert_eq!(
            String::from_utf8(progress)?,
            "Created Web.cs.txt\nCreated Web.cshtml.txt\nCreated token count file: Shop.9_Tokens.txt\n"
        );
        assert!(!out.path().join("Web.razor.txt").exists());
        Ok(())
    }

    #[test]
    fn test_run_without_projects_writes_zero_sentinel() -> anyhow::Result<()> {
        let root = tempdir()?;
        let out = tempdir()?;
        write(root.path(), "Loose.cs", "class Loose {}\n");

        let config = Config::new_for_test(root.path(), out.path());
        let report = run(&config, &CancellationToken::new(), &mut Vec::new())?;

        assert!(report.batches.is_empty());
        assert_eq!(report.total_tokens, 0);
        assert!(out.path().join("Solution.0_Tokens.txt").is_file());
        Ok(())
    }

    #[test]
    fn test_run_dry_run_writes_nothing() -> anyhow::Result<()> {
        let root = tempdir()?;
        let out = tempdir()?;
        let out_dir = out.path().join("dumps");
        write(root.path(), "Api/Api.csproj", "");
        write(root.path(), "Api/Program.cs", "var x = 1;\n");

        let mut config = Config::new_for_test(root.path(), &out_dir);
        config.dry_run = true;
        let mut progress = Vec::new();
        let report = run(&config, &CancellationToken::new(), &mut progress)?;

        // "var x = 1;\n" is 11 chars -> 4.
        assert_eq!(report.total_tokens, 4);
        assert!(!out_dir.exists());
        assert_eq!(
            String::from_utf8(progress)?,
            "Would create Api.cs.txt\nWould create token count file: Solution.4_Tokens.txt\n"
        );
        Ok(())
    }

    #[test]
    fn test_run_respects_cancellation() -> anyhow::Result<()> {
        let root = tempdir()?;
        let out = tempdir()?;
        write(root.path(), "Api/Api.csproj", "");

        let config = Config::new_for_test(root.path(), out.path());
        let token = CancellationToken::new();
        token.cancel();
        let result = run(&config, &token, &mut Vec::new());

        assert!(matches!(result, Err(Error::Interrupted)));
        Ok(())
    }

    #[test]
    fn test_run_missing_root_is_walk_error() {
        let out = tempdir().unwrap();
        let config = Config::new_for_test("/definitely/not/here/slncat", out.path());
        let result = run(&config, &CancellationToken::new(), &mut Vec::new());
        assert!(matches!(result, Err(Error::Walk { .. })));
    }
}
