// src/output/mod.rs

//! Assembly and delivery of the export document.
//!
//! `record` builds the per-file blocks during the walk, `summary` renders the
//! one-line completion report, and `sink` delivers the finished document to
//! the configured destinations.

pub mod record;
pub mod sink;
pub mod summary;
