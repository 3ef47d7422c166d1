// src/filtering/policy.rs

//! Combines ignore rules, blocklists, self-exclusion, and hidden-path
//! detection into one inclusion/exclusion decision per path.

use crate::config::Config;
use crate::filtering::rules::IgnoreRules;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// Matches filenames produced by prior export runs (`export_<digits>.txt`).
static EXPORT_FILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^export_\d+\.txt$").expect("static regex must compile"));

/// Returns the relative path normalized to forward-slash separators.
///
/// Pattern syntax and the hidden-segment check are separator-agnostic, so
/// matching always happens against this normalized form regardless of the
/// host's path-separator convention.
pub fn normalize_path(relative_path: &Path) -> String {
    relative_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Tests whether `name` matches the generated-export naming pattern.
pub fn is_export_artifact(name: &str) -> bool {
    EXPORT_FILE_RE.is_match(name)
}

/// Decides whether an entry is excluded from the export.
///
/// Checks are evaluated in order, first match wins:
/// 1. ignore rules (when `respect_gitignore` is enabled);
/// 2. basename blocklist;
/// 3. extension blocklist (case-insensitive, no leading dot);
/// 4. generated-export self-exclusion;
/// 5. any path segment starting with `.` (hidden suppression, including the
///    final segment, so hidden files directly under the root are covered).
///
/// The decision applies uniformly to files and directories; a `true` result
/// on a directory prunes the entire subtree, so its contents are never
/// individually evaluated.
pub fn should_exclude(
    relative_path: &Path,
    is_dir: bool,
    rules: &IgnoreRules,
    config: &Config,
) -> bool {
    if config.respect_gitignore && rules.is_ignored(relative_path, is_dir) {
        debug!("Ignore rule matched: {}", relative_path.display());
        return true;
    }

    let basename = relative_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if config.ignore_file_names.contains(&basename) {
        debug!("Blocklisted filename: {}", relative_path.display());
        return true;
    }

    if let Some(ext) = relative_path.extension() {
        let ext = ext.to_string_lossy().to_lowercase();
        if config.ignore_extensions.contains(&ext) {
            debug!("Blocklisted extension: {}", relative_path.display());
            return true;
        }
    }

    if is_export_artifact(&basename) {
        debug!("Prior export artifact: {}", relative_path.display());
        return true;
    }

    let normalized = normalize_path(relative_path);
    if normalized.split('/').any(|segment| segment.starts_with('.')) {
        debug!("Hidden path segment: {}", normalized);
        return true;
    }

    false
}
