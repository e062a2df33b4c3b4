//! Manifest parser with schema shape checks
//!
//! Parses YAML into the typed bundle model. A document that does not have
//! the bundle's shape fails here and nothing downstream runs.

use crate::errors::{invalid_manifest, io_error, schema_violation, Result};
use bundlecheck_core::model::Bundle;
use bundlecheck_core::rules::check_shape;
use std::fs;
use std::path::Path;

/// Parse a manifest file
///
/// # Errors
///
/// See [`parse_manifest_str`]; `Io` if the file cannot be read.
pub fn parse_manifest_file(path: &Path) -> Result<Bundle> {
    let content = fs::read_to_string(path).map_err(|e| io_error("read_manifest", path, e))?;
    parse_manifest_str(&content).map_err(|e| e.with_path(path.display().to_string()))
}

/// Parse a manifest from a string
///
/// # Errors
///
/// - `InvalidManifest` if the text is not YAML
/// - `SchemaViolation` if required keys are missing, values have the wrong
///   type, an index is negative or a phase date does not parse
pub fn parse_manifest_str(content: &str) -> Result<Bundle> {
    // Syntax first, so malformed YAML and a wrong shape report differently
    serde_yaml::from_str::<serde_yaml::Value>(content)
        .map_err(|e| invalid_manifest(&e.to_string()))?;

    let bundle: Bundle =
        serde_yaml::from_str(content).map_err(|e| schema_violation(vec![e.to_string()]))?;

    let violations = check_shape(&bundle);
    if !violations.is_empty() {
        return Err(schema_violation(violations));
    }

    tracing::debug!(
        title = %bundle.title,
        tasks = bundle.tasks.len(),
        phases = bundle.phases.len(),
        leaderboards = bundle.leaderboards.len(),
        "manifest parsed"
    );

    Ok(bundle)
}
