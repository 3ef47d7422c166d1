// src/walk.rs

//! Recursive tree traversal and streaming aggregation of the export.
//!
//! The walk is a synchronous depth-first recursion over `fs::read_dir`:
//! siblings are visited in the order the filesystem lists them, and a
//! subdirectory is fully resolved at the point its entry is encountered.
//! Directory handles are scoped to one `walk_dir` frame so deep trees do not
//! leak descriptors. All mutable run state lives in the [`RunOutcome`]
//! threaded through the recursion.

use crate::cancellation::CancellationToken;
use crate::config::Config;
use crate::core_types::RunOutcome;
use crate::errors::{Error, Result};
use crate::filtering::{is_binary_file, should_exclude, IgnoreRules};
use crate::output::record::append_record;
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Walks `config.root` and aggregates every included file into a
/// [`RunOutcome`].
///
/// For each entry the exclusion policy runs first; excluded entries (file or
/// directory) increment the rule-skip counter once, and excluded directories
/// are pruned without descending. Surviving files are then checked against
/// the size limit (strict `>`) and the binary sniffer before their content
/// is read and appended. Read failures on an included file are logged and
/// the file is omitted without touching any skip counter.
///
/// # Errors
/// Returns `Error::RootNotFound` if the root is not an accessible directory,
/// and `Error::Interrupted` if `token` is cancelled mid-walk.
pub fn run_walk(
    config: &Config,
    rules: &IgnoreRules,
    token: &CancellationToken,
) -> Result<RunOutcome> {
    if !config.root.is_dir() {
        return Err(Error::RootNotFound(config.root.display().to_string()));
    }

    let mut outcome = RunOutcome::default();
    walk_dir(&config.root, config, rules, token, &mut outcome)?;
    debug!(
        "Walk complete. Included: {}, skipped by rules: {}, size: {}, binary: {}",
        outcome.included, outcome.skipped_rules, outcome.skipped_size, outcome.skipped_binary
    );
    Ok(outcome)
}

fn walk_dir(
    dir: &Path,
    config: &Config,
    rules: &IgnoreRules,
    token: &CancellationToken,
    outcome: &mut RunOutcome,
) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Could not list directory '{}': {}", dir.display(), e);
            return Ok(());
        }
    };

    for entry in entries {
        if token.is_cancelled() {
            return Err(Error::Interrupted);
        }

        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in '{}': {}", dir.display(), e);
                continue;
            }
        };

        let absolute_path = entry.path();
        let relative_path = match absolute_path.strip_prefix(&config.root) {
            Ok(rel) => rel.to_path_buf(),
            Err(e) => {
                warn!(
                    "Failed to relativize '{}': {}. Skipping.",
                    absolute_path.display(),
                    e
                );
                continue;
            }
        };

        let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);

        if should_exclude(&relative_path, is_dir, rules, config) {
            // Pruned directories count once, not once per descendant.
            outcome.skipped_rules += 1;
            continue;
        }

        if is_dir {
            walk_dir(&absolute_path, config, rules, token, outcome)?;
            continue;
        }

        // Follows symlinks, like the exclusion checks above operate on the
        // entry name rather than the target.
        let metadata = match fs::metadata(&absolute_path) {
            Ok(md) => md,
            Err(e) => {
                warn!(
                    "Could not stat '{}', omitting: {}",
                    absolute_path.display(),
                    e
                );
                continue;
            }
        };

        if metadata.len() > config.max_file_size_bytes {
            debug!(
                "Size limit exceeded: {} ({} bytes)",
                relative_path.display(),
                metadata.len()
            );
            outcome.skipped_size += 1;
            continue;
        }

        if is_binary_file(&absolute_path) {
            debug!("Binary file detected: {}", relative_path.display());
            outcome.skipped_binary += 1;
            continue;
        }

        match fs::read_to_string(&absolute_path) {
            Ok(content) => {
                outcome.included += 1;
                append_record(&mut outcome.export, outcome.included, &relative_path, &content);
            }
            Err(e) => {
                // Best-effort aggregation: the file is omitted, no skip
                // counter moves, the run continues.
                warn!(
                    "Error reading '{}', omitting from export: {}",
                    absolute_path.display(),
                    e
                );
            }
        }
    }

    Ok(())
}
