// src/filtering/mod.rs

//! Provides the exclusion-decision logic applied to every filesystem entry.
//!
//! These functions are used by the tree walker to determine which entries
//! contribute to the export. They are exposed publicly to allow for their
//! use in other contexts.

mod policy;
mod rules;
mod sniff;

pub use policy::{is_export_artifact, normalize_path, should_exclude};
pub use rules::IgnoreRules;
pub use sniff::{is_binary_buffer, is_binary_file};
