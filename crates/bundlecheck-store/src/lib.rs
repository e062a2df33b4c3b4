//! bundlecheck store - filesystem side of bundle checking
//!
//! Provides:
//! - Locating a bundle: a directory, or a zip archive extracted to a temporary directory
//! - Reading and parsing the YAML manifest into the typed model (schema shape gate)
//! - [`FsBundleFiles`], the filesystem implementation of the core file seam

pub mod archive;
pub mod errors;
pub mod fs_files;
pub mod manifest;
pub mod source;

// Re-export key types
pub use errors::Result;
pub use fs_files::FsBundleFiles;
pub use manifest::{parse_manifest_file, parse_manifest_str};
pub use source::{BundleSource, DEFAULT_MANIFEST_NAME};
