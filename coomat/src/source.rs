//! Text-source collaborators
//!
//! The core never touches storage directly; it consumes whole text
//! blobs handed over by a `TextSource`. This module provides the
//! filesystem implementation and an in-memory one for tests and
//! embedding. The storage medium behind an identifier is the source's
//! business, not the matrix's.

use crate::load::LoadError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A provider of matrix text, keyed by an opaque identifier
///
/// Implementations fetch the complete text for an identifier or fail
/// with an I/O error. Retries, timeouts, and cancellation are the
/// source's responsibility.
pub trait TextSource {
    /// Fetch the full text for the given identifier
    fn fetch(&self, id: &str) -> Result<String, LoadError>;
}

/// Filesystem-backed text source
///
/// Identifiers are paths, optionally resolved against a base directory.
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    base: Option<PathBuf>,
}

impl FileSource {
    /// Create a source resolving identifiers as plain paths
    pub fn new() -> Self {
        Self { base: None }
    }

    /// Create a source resolving identifiers relative to a directory
    pub fn with_base<P: AsRef<Path>>(base: P) -> Self {
        Self {
            base: Some(base.as_ref().to_path_buf()),
        }
    }

    fn resolve(&self, id: &str) -> PathBuf {
        match &self.base {
            Some(base) => base.join(id),
            None => PathBuf::from(id),
        }
    }
}

impl TextSource for FileSource {
    fn fetch(&self, id: &str) -> Result<String, LoadError> {
        std::fs::read_to_string(self.resolve(id)).map_err(LoadError::Io)
    }
}

/// In-memory text source for tests and embedded fixtures
///
/// Unknown identifiers fail the same way an unreadable path does, so
/// callers exercise the identical error path as with files.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    texts: HashMap<String, String>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self {
            texts: HashMap::new(),
        }
    }

    /// Register text under an identifier, replacing any previous text
    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.texts.insert(id.into(), text.into());
    }

    /// Builder-style registration
    pub fn with(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(id, text);
        self
    }
}

impl TextSource for MemorySource {
    fn fetch(&self, id: &str) -> Result<String, LoadError> {
        self.texts.get(id).cloned().ok_or_else(|| {
            LoadError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no text registered for \"{id}\""),
            ))
        })
    }
}
