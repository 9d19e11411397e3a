//! Core types and error handling for fastgen.
//!
//! This module forms the foundation of the crate's type system: the
//! crate-wide error enum ([`FastgenError`]), the user-facing error
//! presentation layer ([`ErrorContext`]), and the [`GeneratedFile`] value
//! that flows from the tree builder into the archive writer.

pub mod error;

pub use error::{ErrorContext, FastgenError, user_friendly_error};

use serde::Serialize;

/// One file destined for the output archive.
///
/// The tree builder produces a flat sequence of these; `relative_path` is
/// relative to the archive's root directory (the project name) and must be
/// unique within a single generation run. Duplicate paths are a builder
/// defect and abort the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// Path relative to the project root directory, using `/` separators.
    pub relative_path: String,
    /// Fully rendered file content.
    pub content: String,
}

impl GeneratedFile {
    /// Create a generated file from a path and rendered content.
    pub fn new(relative_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }
}
