// src/cli.rs

use clap::Parser;

/// Exports a project directory as a single text document.
///
/// projtext recursively walks a directory, concatenates the content of every
/// text file that survives its filters (.gitignore rules, size limit, binary
/// detection, hidden paths), and produces one structured document suitable
/// for pasting into tools that consume plain text, such as Large Language
/// Models (LLMs). By default the document is written to a timestamped
/// `export_*.txt` file in the root directory.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory to export.
    #[arg(default_value = ".")]
    pub root: String,

    /// Do not apply the root-level .gitignore rules.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_gitignore: bool,

    /// Do not write an export file into the root directory.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_file: bool,

    #[cfg(feature = "clipboard")]
    /// Copy the export text to the system clipboard.
    #[arg(short = 'p', long, action = clap::ArgAction::SetTrue)]
    pub paste: bool,

    /// Maximum file size to include, in megabytes. Larger files are skipped.
    #[arg(short = 'm', long = "max-size", value_name = "MB")]
    pub max_size_mb: Option<u64>,

    /// Exclude files with these exact names (repeatable).
    #[arg(long = "ignore-file", value_name = "NAME", num_args = 1..)]
    pub ignore_files: Option<Vec<String>>,

    /// Exclude files with these extensions (case-insensitive, repeatable).
    #[arg(short = 'x', long = "ignore-ext", value_name = "EXT", num_args = 1..)]
    pub ignore_extensions: Option<Vec<String>>,
}
