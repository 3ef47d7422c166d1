// src/output/sink.rs

//! Delivery of the finished export document to its destinations.
//!
//! The file sink and the clipboard sink are independent: each is attempted
//! (or not) according to the configuration, and a failure in one never
//! prevents the other from running.

use crate::constants::{EXPORT_FILE_EXT, EXPORT_FILE_PREFIX, EXPORT_TIMESTAMP_FORMAT};
use crate::errors::{io_error_with_path, Result};
use chrono::Local;
use log::info;
use std::fs;
use std::path::Path;

/// Writes the export document into `root` under a timestamped name and
/// returns the file name.
///
/// The name follows `export_<YYYYMMDDHHMMSS>.txt`, which the exclusion
/// policy recognizes so later runs never re-ingest earlier exports.
pub fn write_export_file(root: &Path, export: &str) -> Result<String> {
    let file_name = export_file_name(Local::now());
    let path = root.join(&file_name);
    fs::write(&path, export).map_err(|e| io_error_with_path(e, &path))?;
    info!("Wrote export file {}", path.display());
    Ok(file_name)
}

fn export_file_name(now: chrono::DateTime<Local>) -> String {
    format!(
        "{}{}.{}",
        EXPORT_FILE_PREFIX,
        now.format(EXPORT_TIMESTAMP_FORMAT),
        EXPORT_FILE_EXT
    )
}

/// Copies the export document to the system clipboard.
#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(export: &str) -> Result<()> {
    use crate::errors::Error;

    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    clipboard
        .set_text(export.to_string())
        .map_err(|e| Error::Clipboard(e.to_string()))?;
    info!("Copied export to clipboard ({} bytes)", export.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::is_export_artifact;
    use chrono::TimeZone;
    use tempfile::tempdir;

    #[test]
    fn test_export_file_name_format() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 2).unwrap();
        assert_eq!(export_file_name(at), "export_20240309070502.txt");
    }

    #[test]
    fn test_generated_name_matches_exclusion_pattern() {
        // A written export must be recognized by later runs.
        let name = export_file_name(Local::now());
        assert!(is_export_artifact(&name));
    }

    #[test]
    fn test_write_export_file_creates_file_in_root() {
        let temp = tempdir().unwrap();
        let name = write_export_file(temp.path(), "document body").unwrap();
        let written = fs::read_to_string(temp.path().join(&name)).unwrap();
        assert_eq!(written, "document body");
    }

    #[test]
    fn test_write_export_file_fails_for_missing_root() {
        let result = write_export_file(Path::new("/definitely/not/a/dir"), "x");
        assert!(result.is_err());
    }
}
