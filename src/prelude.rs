//! The `slncat` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types, traits, and functions
//! from the `slncat` library.
//!
//! # Example
//!
//! ```
//! use slncat::prelude::*;
//! # fn main() -> Result<()> {
//!
//! let token = CancellationToken::new();
//! let text = transform_content("using System;\nvar x = 1; // one\n");
//! assert_eq!(text, "var x = 1; \n");
//! assert_eq!(estimate_tokens(&text), 4);
//! # let _ = token;
//!
//! # Ok(())
//! # }
//! ```

pub use crate::cancellation::CancellationToken;
pub use crate::config::{load_settings, Config, ConfigBuilder, Settings};
pub use crate::core_types::{
    BatchReport, FileBatch, ProcessedFile, ProjectDescriptor, RunReport, SourceFile,
};
pub use crate::discovery::{discover_projects, is_test_project, solution_base_name};
pub use crate::errors::{Error, Result};
pub use crate::filtering::{
    has_excluded_name, has_extension, is_in_migrations_dir, matches_ignore_prefix, select_files,
};
pub use crate::output::{sentinel_file_name, write_batch, write_sentinel};
pub use crate::processing::{
    estimate_tokens,
    filters::{filter_lines, strip_comments, ContentFilter, DirectiveLineFilter, StripCommentsFilter},
    process_file, transform_content,
};
pub use crate::run;
