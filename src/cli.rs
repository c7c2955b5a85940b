// src/cli.rs

use crate::constants::DEFAULT_CONFIG_FILE;
use clap::Parser;
use std::path::PathBuf;

/// Concatenates the projects of a .NET solution into per-project text dumps.
///
/// slncat reads `SolutionFolder` and `IgnoreFolders` from a JSON settings file,
/// finds every non-test `*.csproj` below the solution folder, and writes one
/// `{Project}.{ext}.txt` file per project and source type (`cs`, `cshtml`,
/// `razor`) with comments, using-directives and namespace wrappers stripped.
/// The estimated token total is written into the name of an empty
/// `{Solution}.{N}_Tokens.txt` file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON settings file.
    #[arg(short = 'c', long = "config", value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory receiving the dump files and the token count file.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Perform a dry run. Compute the dumps and token total but write no files.
    #[arg(short = 'D', long, action = clap::ArgAction::SetTrue)]
    pub dry_run: bool,
}
