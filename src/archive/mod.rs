//! Deterministic zip assembly.
//!
//! Wraps the `zip` crate behind the narrow contract the tree builder needs:
//! one root directory named after the project, one `add_file` call per
//! generated file, and a byte blob out. Two properties are enforced here:
//!
//! - **Duplicate paths are fatal.** A second `add_file` with the same path
//!   means the tree builder produced a colliding layout; that is a defect,
//!   never recoverable configuration.
//! - **Byte determinism.** Entries are written in insertion order with a
//!   pinned modification timestamp, so the same input always serializes to
//!   the same bytes.

use std::collections::HashSet;
use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::core::{FastgenError, GeneratedFile};

/// In-memory zip archive with a single project root directory.
pub struct ProjectArchive {
    root: String,
    writer: ZipWriter<Cursor<Vec<u8>>>,
    paths: HashSet<String>,
}

impl ProjectArchive {
    /// Create an empty archive whose entries all live under `root_dir/`.
    #[must_use]
    pub fn new(root_dir: &str) -> Self {
        Self {
            root: root_dir.to_string(),
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            paths: HashSet::new(),
        }
    }

    /// Add one file under the project root.
    ///
    /// # Errors
    ///
    /// [`FastgenError::DuplicateFile`] if `relative_path` was already added;
    /// [`FastgenError::ArchiveSerialization`] on zip failures.
    pub fn add_file(&mut self, relative_path: &str, content: &str) -> Result<(), FastgenError> {
        if !self.paths.insert(relative_path.to_string()) {
            return Err(FastgenError::DuplicateFile {
                path: relative_path.to_string(),
            });
        }

        // Pinned timestamp (DOS epoch) keeps archives byte-identical across
        // runs with identical input.
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        self.writer
            .start_file(format!("{}/{}", self.root, relative_path), options)
            .map_err(|source| FastgenError::ArchiveSerialization { source })?;
        self.writer.write_all(content.as_bytes())?;

        Ok(())
    }

    /// Finalize the archive and return the serialized bytes.
    pub fn finish(self) -> Result<Vec<u8>, FastgenError> {
        let cursor = self
            .writer
            .finish()
            .map_err(|source| FastgenError::ArchiveSerialization { source })?;
        Ok(cursor.into_inner())
    }
}

/// Serialize a generated file set into a zip blob rooted at `project_name/`.
///
/// Files are inserted in the order the tree builder emitted them.
pub fn write_archive(
    project_name: &str,
    files: &[GeneratedFile],
) -> Result<Vec<u8>, FastgenError> {
    let mut archive = ProjectArchive::new(project_name);
    for file in files {
        archive.add_file(&file.relative_path, &file.content)?;
    }
    let bytes = archive.finish()?;
    tracing::debug!(project = project_name, files = files.len(), bytes = bytes.len(), "archive serialized");
    Ok(bytes)
}

/// Name of the artifact written to disk for a project.
#[must_use]
pub fn archive_file_name(project_name: &str) -> String {
    format!("{project_name}.zip")
}
