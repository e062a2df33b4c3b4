//! Filesystem implementation of the bundle file seam

use bundlecheck_core::errors::{BundleCheckError, Result};
use bundlecheck_core::files::{BundleFiles, FileProbe};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io;
use std::path::PathBuf;

/// Resolves manifest paths against a bundle root directory.
#[derive(Debug, Clone)]
pub struct FsBundleFiles {
    root: PathBuf,
}

impl FsBundleFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl BundleFiles for FsBundleFiles {
    fn probe(&self, rel_path: &str) -> FileProbe {
        let path = self.root.join(rel_path);
        if path.is_file() {
            FileProbe::File
        } else if path.is_dir() {
            FileProbe::Directory
        } else {
            FileProbe::Missing
        }
    }

    /// Streams the file through SHA-256; datasets can be large
    fn fingerprint(&self, rel_path: &str) -> Result<String> {
        let path = self.root.join(rel_path);
        let unreadable = |e: io::Error| -> BundleCheckError {
            if e.kind() == io::ErrorKind::NotFound {
                BundleCheckError::FileNotFound {
                    path: rel_path.to_string(),
                }
            } else {
                BundleCheckError::FileUnreadable {
                    path: rel_path.to_string(),
                    reason: e.to_string(),
                }
            }
        };

        let mut file = File::open(&path).map_err(unreadable)?;
        let mut hasher = Sha256::new();
        io::copy(&mut file, &mut hasher).map_err(unreadable)?;
        Ok(hex::encode(hasher.finalize()))
    }
}
