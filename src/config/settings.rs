// src/config/settings.rs

//! Persisted settings, loaded from the user configuration directory.
//!
//! The settings file supplies per-user defaults for options the CLI does not
//! override on a given invocation. A missing file yields the documented
//! defaults; a malformed file is a configuration error.

use crate::errors::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Per-user defaults for an export run.
///
/// Stored as TOML at `<config dir>/projtext/config.toml`, e.g.:
///
/// ```toml
/// respect-gitignore = true
/// max-file-size-mb = 5
/// ignore-files = ["LICENSE"]
/// ignore-extensions = ["lock", "min.js"]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// Apply the root-level ignore file's rules.
    pub respect_gitignore: bool,
    /// Write the export file into the root directory.
    pub create_file: bool,
    /// Copy the export text to the system clipboard.
    pub copy_to_clipboard: bool,
    /// Maximum included file size, in megabytes.
    pub max_file_size_mb: u64,
    /// Exact basenames to exclude.
    pub ignore_files: Vec<String>,
    /// Extensions to exclude (case-insensitive, no leading dot).
    pub ignore_extensions: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            respect_gitignore: true,
            create_file: true,
            copy_to_clipboard: false,
            max_file_size_mb: 5,
            ignore_files: Vec::new(),
            ignore_extensions: Vec::new(),
        }
    }
}

/// Name of the environment variable that overrides the settings directory.
pub const CONFIG_DIR_ENV: &str = "PROJTEXT_CONFIG_DIR";

/// Path of the persisted settings file, if a config directory exists.
///
/// When `PROJTEXT_CONFIG_DIR` is set, it replaces the default
/// `<config dir>/projtext` directory entirely. Test suites point it at a
/// scratch directory so runs never pick up a developer's real settings.
pub fn settings_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir).join("config.toml"));
    }
    dirs::config_dir().map(|dir| dir.join("projtext").join("config.toml"))
}

/// Loads persisted settings, falling back to defaults when no file exists.
///
/// # Errors
/// Returns `Error::Config` if the file exists but cannot be read or parsed.
pub fn load() -> Result<Settings> {
    let Some(path) = settings_path() else {
        return Ok(Settings::default());
    };
    if !path.exists() {
        return Ok(Settings::default());
    }

    let contents = fs::read_to_string(&path).map_err(|e| {
        Error::Config(format!(
            "failed to read settings file '{}': {}",
            path.display(),
            e
        ))
    })?;
    let settings = toml::from_str(&contents).map_err(|e| {
        Error::Config(format!(
            "failed to parse settings file '{}': {}",
            path.display(),
            e
        ))
    })?;
    debug!("Loaded settings from {}", path.display());
    Ok(settings)
}
