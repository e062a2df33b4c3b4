//! Bundle location
//!
//! A bundle is either a directory holding the manifest and its files, or a
//! zip archive of one. Archives are extracted into a temporary directory that
//! lives as long as the [`BundleSource`].

use crate::archive::extract_zip;
use crate::errors::{io_error, manifest_not_found, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Manifest file name looked up at the bundle root unless overridden.
pub const DEFAULT_MANIFEST_NAME: &str = "competition.yaml";

#[derive(Debug)]
pub struct BundleSource {
    root: PathBuf,
    display_name: String,
    // Keeps the extraction directory alive
    extracted: Option<TempDir>,
}

impl BundleSource {
    /// Open a bundle directory or zip archive.
    ///
    /// # Errors
    ///
    /// `Io` if the path does not exist or the temporary directory cannot be
    /// created; `InvalidArchive` if a non-directory path is not a zip.
    pub fn open(input: &Path) -> Result<Self> {
        let display_name = display_name(input);

        if input.is_dir() {
            return Ok(Self {
                root: input.to_path_buf(),
                display_name,
                extracted: None,
            });
        }

        // Surface a missing input as an IO error rather than a zip error
        std::fs::metadata(input).map_err(|e| io_error("open_bundle", input, e))?;

        let extracted = TempDir::new().map_err(|e| io_error("create_tempdir", input, e))?;
        extract_zip(input, extracted.path())?;

        Ok(Self {
            root: extracted.path().to_path_buf(),
            display_name,
            extracted: Some(extracted),
        })
    }

    /// Directory that manifest-relative paths resolve against
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Basename of the path the bundle was opened from
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// True if the bundle was extracted from an archive
    pub fn is_archive(&self) -> bool {
        self.extracted.is_some()
    }

    /// Path of the manifest, checked for existence.
    ///
    /// # Errors
    ///
    /// `ManifestNotFound` if no such file exists at the bundle root.
    pub fn manifest_path(&self, manifest_name: &str) -> Result<PathBuf> {
        let path = self.root.join(manifest_name);
        if path.is_file() {
            Ok(path)
        } else {
            Err(manifest_not_found(&path))
        }
    }
}

fn display_name(input: &Path) -> String {
    let absolute = std::path::absolute(input).unwrap_or_else(|_| input.to_path_buf());
    absolute
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string())
}
