//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the conditions
//! that can abort an export run, offering more context than a bare
//! `std::io::Error`.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Application-specific errors used throughout `projtext`.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String, // Use String to avoid lifetime issues if PathBuf is dropped
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The export root does not exist or is not a directory. Nothing is written.
    #[error("No directory to export: '{0}' is not an accessible directory")]
    RootNotFound(String),

    /// Invalid configuration settings or combinations.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Error related to clipboard operations (copying).
    #[error("Clipboard error: {0}")]
    Clipboard(String), // arboard::Error doesn't implement std::error::Error directly

    /// The operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,
}

/// Helper function to create an `Error::Io` with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
