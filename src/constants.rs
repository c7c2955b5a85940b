// src/constants.rs

/// Default name of the settings file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "appsettings.json";

/// Extension of the per-project build descriptor (`*.csproj`).
pub const PROJECT_MANIFEST_EXTENSION: &str = "csproj";

/// Extension of the solution descriptor used to name the sentinel (`*.sln`).
pub const SOLUTION_MANIFEST_EXTENSION: &str = "sln";

/// Base name of the sentinel when the root holds no solution descriptor.
pub const FALLBACK_SOLUTION_NAME: &str = "Solution";

/// Source extensions dumped per project, in output order.
pub const WATCHED_EXTENSIONS: [&str; 3] = ["cs", "cshtml", "razor"];

/// Projects whose name contains this marker (case-insensitive) are skipped.
pub const TEST_PROJECT_MARKER: &str = "test";

/// Directory name whose contents are never dumped (case-insensitive).
pub const MIGRATIONS_DIR_NAME: &str = "migrations";

/// Files whose name contains one of these markers (case-insensitive) are skipped.
pub const EXCLUDED_FILE_NAME_MARKERS: [&str; 2] = ["assembly", "globalusings"];

/// Prefix of the line opening each file block.
pub const FILE_HEADER_PREFIX: &str = "--- File:";

/// Line closing each file block.
pub const FILE_FOOTER: &str = "--- End of file";

/// Suffix of the sentinel file name, after the token total.
pub const SENTINEL_SUFFIX: &str = "_Tokens.txt";

/// Token estimate factor: 0.3 tokens per character, as an exact ratio.
pub const TOKENS_PER_CHAR_NUMERATOR: u64 = 3;
pub const TOKENS_PER_CHAR_DENOMINATOR: u64 = 10;

/// Trimmed lines starting with this are using-directives and are dropped.
pub const USING_DIRECTIVE_PREFIX: &str = "using ";

/// Trimmed lines starting with this are namespace declarations and are dropped.
pub const NAMESPACE_DECLARATION_PREFIX: &str = "namespace ";
