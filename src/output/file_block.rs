use crate::constants::{FILE_FOOTER, FILE_HEADER_PREFIX};
use crate::core_types::ProcessedFile;
use std::io::{self, Write};

/// Writes one file's block: header, blank line, content, blank line, footer,
/// blank line.
///
/// `content` is written as-is; the line filter already terminated every kept
/// line with `\n`.
pub fn write_file_block(writer: &mut dyn Write, file: &ProcessedFile) -> io::Result<()> {
    writeln!(writer, "{} {}", FILE_HEADER_PREFIX, file.file_name)?;
    writeln!(writer)?;
    writer.write_all(file.content.as_bytes())?;
    writeln!(writer)?;
    writeln!(writer, "{}", FILE_FOOTER)?;
    writeln!(writer)?;
    Ok(())
}
