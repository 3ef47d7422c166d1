//! Defines the core `Config` struct and related types for application configuration.
//!
//! This module consolidates the settings merged from persisted settings and
//! the CLI, making them available to the engine in a structured and
//! type-safe manner. The `Config` is immutable for the duration of a run.

use std::collections::HashSet;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
pub mod settings;

/// The recognized options for one export run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory of the export.
    pub root: PathBuf,
    /// Whether to apply the root-level ignore file's rules.
    pub respect_gitignore: bool,
    /// Whether to write the export file into the root directory.
    pub create_file: bool,
    /// Whether to copy the export text to the system clipboard.
    pub copy_to_clipboard: bool,
    /// Maximum file size in bytes. Files strictly larger than this are
    /// skipped without being read.
    pub max_file_size_bytes: u64,
    /// Exact basenames to exclude.
    pub ignore_file_names: HashSet<String>,
    /// Extensions to exclude, stored lowercased without a leading dot.
    pub ignore_extensions: HashSet<String>,
}

impl Config {
    /// Creates a default `Config` rooted at `root` for testing purposes.
    ///
    /// This function is hidden from public documentation and is intended for
    /// use in tests and doc tests only.
    #[doc(hidden)]
    pub fn new_for_test(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            respect_gitignore: true,
            create_file: false,
            copy_to_clipboard: false,
            max_file_size_bytes: 5 * 1024 * 1024,
            ignore_file_names: HashSet::new(),
            ignore_extensions: HashSet::new(),
        }
    }
}
