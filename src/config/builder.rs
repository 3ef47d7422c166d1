use super::settings::Settings;
use super::Config;
use crate::cli::Cli;
use crate::errors::{Error, Result};
use std::collections::HashSet;
use std::path::PathBuf;

/// Builds a validated [`Config`], merging persisted settings with CLI
/// overrides or programmatic values.
///
/// # Examples
///
/// ```
/// use projtext::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .root(".")
///     .respect_gitignore(false)
///     .max_file_size_mb(1)
///     .ignore_extensions(vec!["PNG".to_string()])
///     .build()
///     .unwrap();
///
/// assert_eq!(config.max_file_size_bytes, 1024 * 1024);
/// // Extensions are normalized: lowercased, leading dot stripped.
/// assert!(config.ignore_extensions.contains("png"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    root: PathBuf,
    respect_gitignore: bool,
    create_file: bool,
    copy_to_clipboard: bool,
    max_file_size_mb: u64,
    ignore_file_names: Vec<String>,
    ignore_extensions: Vec<String>,
}

impl ConfigBuilder {
    /// Creates a builder with the documented defaults: gitignore respected,
    /// file output enabled, clipboard disabled, 5 MB size limit, empty
    /// blocklists.
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("."),
            respect_gitignore: true,
            create_file: true,
            copy_to_clipboard: false,
            max_file_size_mb: 5,
            ignore_file_names: Vec::new(),
            ignore_extensions: Vec::new(),
        }
    }

    /// Seeds the builder from persisted settings, then applies CLI overrides.
    pub fn from_cli_and_settings(cli: Cli, settings: Settings) -> Self {
        let mut builder = Self {
            root: PathBuf::from(cli.root),
            respect_gitignore: settings.respect_gitignore,
            create_file: settings.create_file,
            copy_to_clipboard: settings.copy_to_clipboard,
            max_file_size_mb: settings.max_file_size_mb,
            ignore_file_names: settings.ignore_files,
            ignore_extensions: settings.ignore_extensions,
        };
        if cli.no_gitignore {
            builder.respect_gitignore = false;
        }
        if cli.no_file {
            builder.create_file = false;
        }
        #[cfg(feature = "clipboard")]
        if cli.paste {
            builder.copy_to_clipboard = true;
        }
        if let Some(mb) = cli.max_size_mb {
            builder.max_file_size_mb = mb;
        }
        if let Some(names) = cli.ignore_files {
            builder.ignore_file_names.extend(names);
        }
        if let Some(exts) = cli.ignore_extensions {
            builder.ignore_extensions.extend(exts);
        }
        builder
    }

    /// Sets the root directory of the export.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Enables or disables the root-level ignore file.
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.respect_gitignore = yes;
        self
    }

    /// Enables or disables writing the export file.
    pub fn create_file(mut self, yes: bool) -> Self {
        self.create_file = yes;
        self
    }

    /// Enables or disables copying the export text to the clipboard.
    pub fn copy_to_clipboard(mut self, yes: bool) -> Self {
        self.copy_to_clipboard = yes;
        self
    }

    /// Sets the maximum included file size, in megabytes.
    pub fn max_file_size_mb(mut self, mb: u64) -> Self {
        self.max_file_size_mb = mb;
        self
    }

    /// Sets the exact basenames to exclude.
    pub fn ignore_file_names(mut self, names: Vec<String>) -> Self {
        self.ignore_file_names = names;
        self
    }

    /// Sets the extensions to exclude. Values are normalized on build.
    pub fn ignore_extensions(mut self, extensions: Vec<String>) -> Self {
        self.ignore_extensions = extensions;
        self
    }

    /// Validates the options and produces an immutable [`Config`].
    ///
    /// # Errors
    /// Returns `Error::Config` if the size limit is zero.
    pub fn build(self) -> Result<Config> {
        if self.max_file_size_mb == 0 {
            return Err(Error::Config(
                "max file size must be greater than zero".to_string(),
            ));
        }
        Ok(Config {
            root: self.root,
            respect_gitignore: self.respect_gitignore,
            create_file: self.create_file,
            copy_to_clipboard: self.copy_to_clipboard,
            max_file_size_bytes: self.max_file_size_mb * 1024 * 1024,
            ignore_file_names: self.ignore_file_names.into_iter().collect(),
            ignore_extensions: normalize_extensions(self.ignore_extensions),
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercases extensions and strips any leading dot, so `".PNG"`, `"PNG"`,
/// and `"png"` all match the same files.
fn normalize_extensions(extensions: Vec<String>) -> HashSet<String> {
    extensions
        .into_iter()
        .map(|ext| ext.trim_start_matches('.').to_lowercase())
        .collect()
}
