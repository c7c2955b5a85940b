// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // Not every integration test runs the binary.
pub fn slncat_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("slncat"))
}

/// Writes `content` to `root/relative`, creating parent directories.
#[allow(dead_code)]
pub fn create_file(root: &Path, relative: &str, content: &str) -> std::io::Result<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

/// Writes an `appsettings.json` into `dir` pointing at `solution_folder`.
#[allow(dead_code)]
pub fn write_settings(
    dir: &Path,
    solution_folder: &Path,
    ignore_folders: &[&str],
) -> std::io::Result<()> {
    let settings = serde_json::json!({
        "SolutionFolder": solution_folder.to_string_lossy(),
        "IgnoreFolders": ignore_folders,
    });
    fs::write(dir.join("appsettings.json"), settings.to_string())
}
