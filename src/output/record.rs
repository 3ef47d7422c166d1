// src/output/record.rs

//! Formatting of one included file into its block of the export document.

use crate::constants::RECORD_SEPARATOR;
use crate::filtering::normalize_path;
use std::fmt::Write;
use std::path::Path;

/// Appends the record for one included file to the export buffer.
///
/// `index` is the 1-based position of the file among included files. The
/// relative path is rendered with forward slashes and a `./` prefix on every
/// platform, so exports are byte-identical across operating systems. The
/// content is embedded verbatim inside a fenced block.
pub fn append_record(buffer: &mut String, index: usize, relative_path: &Path, content: &str) {
    let display_path = normalize_path(relative_path);
    // Writing to a String cannot fail.
    let _ = write!(
        buffer,
        "File {index}:\n{RECORD_SEPARATOR}\nFilename: ./{display_path}\n{RECORD_SEPARATOR}\nBody:\n```\n{content}\n```\n\n"
    );
}
