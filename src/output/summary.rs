// src/output/summary.rs

//! Rendering of the one-line completion summary shown after a run.

use crate::core_types::RunOutcome;

/// Formats the completion summary for a finished run.
///
/// `export_file` is the name of the written export file, if one was created.
/// Skip categories are reported only when non-zero, joined with the other
/// parts by `". "`.
pub fn format_summary(outcome: &RunOutcome, export_file: Option<&str>) -> String {
    let mut parts = Vec::new();
    match export_file {
        Some(name) => parts.push(format!("Export complete! Created: {name}")),
        // No trailing punctuation here: the parts are joined with ". ".
        None => parts.push("Export complete".to_string()),
    }
    parts.push(format!("Files processed: {}", outcome.included));
    if outcome.skipped_rules > 0 {
        parts.push(format!(
            "Files/directories skipped (ignore rules): {}",
            outcome.skipped_rules
        ));
    }
    if outcome.skipped_size > 0 {
        parts.push(format!("Files skipped (size): {}", outcome.skipped_size));
    }
    if outcome.skipped_binary > 0 {
        parts.push(format!("Files skipped (binary): {}", outcome.skipped_binary));
    }
    parts.join(". ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_run_with_file() {
        let outcome = RunOutcome {
            included: 4,
            ..Default::default()
        };
        assert_eq!(
            format_summary(&outcome, Some("export_20240101120000.txt")),
            "Export complete! Created: export_20240101120000.txt. Files processed: 4"
        );
    }

    #[test]
    fn test_clean_run_without_file() {
        let outcome = RunOutcome {
            included: 2,
            ..Default::default()
        };
        assert_eq!(format_summary(&outcome, None), "Export complete. Files processed: 2");
    }

    #[test]
    fn test_all_skip_categories_reported() {
        let outcome = RunOutcome {
            included: 10,
            skipped_rules: 3,
            skipped_size: 2,
            skipped_binary: 1,
            ..Default::default()
        };
        assert_eq!(
            format_summary(&outcome, None),
            "Export complete. Files processed: 10. \
             Files/directories skipped (ignore rules): 3. \
             Files skipped (size): 2. \
             Files skipped (binary): 1"
        );
    }

    #[test]
    fn test_zero_categories_suppressed() {
        let outcome = RunOutcome {
            included: 1,
            skipped_binary: 5,
            ..Default::default()
        };
        let summary = format_summary(&outcome, None);
        assert!(!summary.contains("ignore rules"));
        assert!(!summary.contains("(size)"));
        assert!(summary.ends_with("Files skipped (binary): 5"));
    }
}
