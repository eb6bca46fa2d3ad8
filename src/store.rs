//! Storage seam between the resolver and the content tree.
//!
//! The resolver never touches `std::fs` directly. Everything it needs from
//! storage is two operations — list a directory's immediate children and
//! read a file to a string — expressed by the [`ContentStore`] trait. The
//! production backend is [`FsStore`], rooted at a configured content
//! directory; tests substitute an in-memory store implementing the same
//! trait.
//!
//! ## Path Convention
//!
//! Store paths are relative to the content root and use `/` separators
//! regardless of platform: `"japanese/course-1/descriptor.json"`. The empty
//! string names the root itself. Backends own the translation to their
//! native addressing.
//!
//! ## Error Mapping
//!
//! A missing file or directory is a [`ContentError::NotFound`] carrying the
//! store-relative path; every other I/O failure passes through as
//! [`ContentError::Io`]. Descriptor parse failures are raised one layer up,
//! in [`crate::descriptor`], as [`ContentError::MalformedDescriptor`].

use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("malformed descriptor at {path}: {reason}")]
    MalformedDescriptor { path: String, reason: String },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// What a directory entry is, as far as the resolver cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

/// Read-only access to the content tree.
///
/// Implementations must return [`ContentError::NotFound`] for paths that do
/// not exist, list entries sorted by name (listings feed deterministic
/// ordering logic), and omit hidden entries (names starting with `.`).
/// `Sync` is required so sibling reads within one listing can fan out
/// across threads.
pub trait ContentStore: Sync {
    /// List the immediate children of a directory. `""` names the root.
    fn list(&self, dir: &str) -> Result<Vec<Entry>, ContentError>;

    /// Read a file to a string.
    fn read(&self, path: &str) -> Result<String, ContentError>;
}

/// Filesystem-backed store rooted at the content directory.
///
/// The root is injected once at construction; no other part of the crate
/// resolves content paths.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn full_path(&self, rel: &str) -> PathBuf {
        if rel.is_empty() {
            self.root.clone()
        } else {
            self.root.join(rel)
        }
    }

    fn map_io(err: io::Error, rel: &str) -> ContentError {
        match err.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => {
                ContentError::NotFound(display_rel(rel))
            }
            _ => ContentError::Io(err),
        }
    }
}

fn display_rel(rel: &str) -> String {
    if rel.is_empty() {
        ".".to_string()
    } else {
        rel.to_string()
    }
}

impl ContentStore for FsStore {
    fn list(&self, dir: &str) -> Result<Vec<Entry>, ContentError> {
        let full = self.full_path(dir);
        let read = fs::read_dir(&full).map_err(|e| Self::map_io(e, dir))?;

        let mut entries = Vec::new();
        for entry in read {
            let entry = entry.map_err(|e| Self::map_io(e, dir))?;
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with('.') {
                continue;
            }
            let file_type = entry.file_type().map_err(|e| Self::map_io(e, dir))?;
            let kind = if file_type.is_dir() {
                EntryKind::Dir
            } else {
                EntryKind::File
            };
            entries.push(Entry { name, kind });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read(&self, path: &str) -> Result<String, ContentError> {
        fs::read_to_string(self.full_path(path)).map_err(|e| Self::map_io(e, path))
    }
}
