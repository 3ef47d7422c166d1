//! `projtext` is a library and command-line tool that exports a project
//! directory as one structured text document.
//!
//! It walks the directory tree, filters out ignored, oversized, binary, and
//! hidden entries, and concatenates the surviving files into a single
//! document with a uniform per-file record format. The document can be
//! written to a timestamped file in the root directory, copied to the system
//! clipboard, or both.
//!
//! # Example: Library Usage
//!
//! ```
//! use projtext::{export, CancellationToken, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().unwrap();
//! fs::write(temp_dir.path().join("main.rs"), "fn main() {}").unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .root(temp_dir.path())
//!     .create_file(false)
//!     .build()
//!     .unwrap();
//!
//! let outcome = export(&config, &CancellationToken::new()).unwrap();
//! assert_eq!(outcome.included, 1);
//! assert!(outcome.export.contains("Filename: ./main.rs"));
//! ```

pub mod cancellation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod signal;
pub mod walk;

pub use cancellation::CancellationToken;
pub use config::{Config, ConfigBuilder};
pub use core_types::RunOutcome;
pub use errors::{Error, Result};

use filtering::IgnoreRules;

/// Runs an export: loads the ignore rules, walks the tree, and returns the
/// aggregated document and skip counters.
///
/// Delivery to the file and clipboard sinks is left to the caller (see
/// [`output::sink`]), so library users can consume the document directly.
///
/// # Errors
/// Returns `Error::RootNotFound` if `config.root` is not an accessible
/// directory, and `Error::Interrupted` if `token` is cancelled mid-walk.
pub fn export(config: &Config, token: &CancellationToken) -> Result<RunOutcome> {
    let rules = if config.respect_gitignore {
        IgnoreRules::load(&config.root)
    } else {
        IgnoreRules::none()
    };
    walk::run_walk(config, &rules, token)
}
