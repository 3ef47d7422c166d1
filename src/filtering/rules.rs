// src/filtering/rules.rs

//! Compiles ignore-file patterns into a matcher over root-relative paths.

use crate::constants::IGNORE_FILE_NAME;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// An immutable set of compiled ignore rules for one export run.
///
/// Pattern semantics follow the standard gitignore grammar: literal segments,
/// `*`/`**` wildcards, leading-`/` anchored patterns, trailing-`/`
/// directory-only patterns, and `!` negation. Paths are matched relative to
/// the export root; separator normalization is handled by the matcher.
///
/// # Examples
///
/// ```
/// use projtext::filtering::IgnoreRules;
/// use std::path::Path;
///
/// let rules = IgnoreRules::from_patterns(Path::new("."), "*.log\n!important.log\n");
/// assert!(rules.is_ignored(Path::new("debug.log"), false));
/// assert!(!rules.is_ignored(Path::new("important.log"), false));
/// ```
pub struct IgnoreRules {
    matcher: Gitignore,
}

impl IgnoreRules {
    /// A rule set that matches nothing. Used when the ignore file is absent
    /// or the feature is disabled.
    pub fn none() -> Self {
        Self {
            matcher: Gitignore::empty(),
        }
    }

    /// Compiles `patterns` (newline-separated gitignore syntax) into a rule
    /// set rooted at `root`. Invalid lines are logged and skipped rather than
    /// failing the run.
    pub fn from_patterns(root: &Path, patterns: &str) -> Self {
        let mut builder = GitignoreBuilder::new(root);
        for line in patterns.lines() {
            if let Err(e) = builder.add_line(None, line) {
                warn!("Invalid ignore pattern '{}': {}", line, e);
            }
        }
        match builder.build() {
            Ok(matcher) => Self { matcher },
            Err(e) => {
                warn!("Failed to compile ignore rules, matching nothing: {}", e);
                Self::none()
            }
        }
    }

    /// Loads the conventional root-level ignore file (`.gitignore`) from
    /// `root`. A missing or unreadable file yields a rule set that matches
    /// nothing.
    pub fn load(root: &Path) -> Self {
        let ignore_path = root.join(IGNORE_FILE_NAME);
        match fs::read_to_string(&ignore_path) {
            Ok(contents) => {
                debug!("Loaded ignore file: {}", ignore_path.display());
                Self::from_patterns(root, &contents)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::none(),
            Err(e) => {
                warn!(
                    "Could not read ignore file '{}', matching nothing: {}",
                    ignore_path.display(),
                    e
                );
                Self::none()
            }
        }
    }

    /// Tests whether `relative_path` is excluded by the rules. Negation
    /// patterns re-include previously excluded paths.
    pub fn is_ignored(&self, relative_path: &Path, is_dir: bool) -> bool {
        self.matcher.matched(relative_path, is_dir).is_ignore()
    }
}
