//! Error handling for bundlecheck-store
//!
//! Wraps bundlecheck-core BcError with store-specific helpers

use bundlecheck_core::errors::{BcError, BcErrorKind};
use std::path::Path;

/// Result type alias using BcError
pub type Result<T> = std::result::Result<T, BcError>;

/// Create a manifest-not-found error
pub fn manifest_not_found(path: &Path) -> BcError {
    BcError::new(BcErrorKind::ManifestNotFound)
        .with_op("open_manifest")
        .with_path(path.display().to_string())
        .with_message("No competition manifest found at bundle root")
}

/// Create an error for a manifest that is not valid YAML
pub fn invalid_manifest(reason: &str) -> BcError {
    BcError::new(BcErrorKind::InvalidManifest)
        .with_op("parse_manifest")
        .with_message(format!("YAML parse error: {}", reason))
}

/// Create a schema violation error carrying every violation found
pub fn schema_violation(details: Vec<String>) -> BcError {
    BcError::new(BcErrorKind::SchemaViolation)
        .with_op("parse_manifest")
        .with_message("Manifest does not match the bundle schema")
        .with_details(details)
}

/// Create an archive error
pub fn invalid_archive(path: &Path, reason: &str) -> BcError {
    BcError::new(BcErrorKind::InvalidArchive)
        .with_op("extract_archive")
        .with_path(path.display().to_string())
        .with_message(reason.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> BcError {
    BcError::new(BcErrorKind::Io)
        .with_op(operation.to_string())
        .with_path(path.display().to_string())
        .with_message(err.to_string())
}
