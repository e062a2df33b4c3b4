//! File identity seam
//!
//! Validation needs to know whether a referenced path exists, and
//! normalization needs a content fingerprint for it. Both go through
//! [`BundleFiles`], so the core never touches the filesystem directly.

use crate::errors::{BundleCheckError, Result};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

/// What a bundle-relative path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileProbe {
    File,
    Directory,
    Missing,
}

/// Access to the files shipped alongside a bundle manifest.
pub trait BundleFiles {
    /// Classify a path relative to the bundle root
    fn probe(&self, rel_path: &str) -> FileProbe;

    /// Content fingerprint of a regular file relative to the bundle root
    ///
    /// # Errors
    ///
    /// `FileMissing` if the path does not exist, `Io` if it cannot be read.
    fn fingerprint(&self, rel_path: &str) -> Result<String>;
}

/// Hex-encoded SHA-256 digest of `content`.
pub fn fingerprint_bytes(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

/// True if `value` is a hyphenated 8-4-4-4-12 hexadecimal UUID.
///
/// Such paths name files that are resolved lazily by the server, so a
/// missing file is tolerated for them.
pub fn is_uuid_placeholder(value: &str) -> bool {
    // 36 characters rules out the simple, braced and urn forms `Uuid` also accepts
    value.len() == 36 && Uuid::try_parse(value).is_ok()
}

/// In-memory [`BundleFiles`] keyed by bundle-relative path.
#[derive(Debug, Clone, Default)]
pub struct MemoryBundleFiles {
    files: BTreeMap<String, Vec<u8>>,
    directories: BTreeSet<String>,
}

impl MemoryBundleFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a regular file
    pub fn with_file(mut self, rel_path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(rel_path.into(), content.into());
        self
    }

    /// Add a directory
    pub fn with_directory(mut self, rel_path: impl Into<String>) -> Self {
        self.directories.insert(rel_path.into());
        self
    }
}

impl BundleFiles for MemoryBundleFiles {
    fn probe(&self, rel_path: &str) -> FileProbe {
        if self.files.contains_key(rel_path) {
            FileProbe::File
        } else if self.directories.contains(rel_path) {
            FileProbe::Directory
        } else {
            FileProbe::Missing
        }
    }

    fn fingerprint(&self, rel_path: &str) -> Result<String> {
        self.files
            .get(rel_path)
            .map(|content| fingerprint_bytes(content))
            .ok_or_else(|| {
                BundleCheckError::FileNotFound {
                    path: rel_path.to_string(),
                }
                .into()
            })
    }
}
