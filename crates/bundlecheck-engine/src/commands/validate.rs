//! Single-bundle validation.
//!
//! ## Pipeline
//! 1. Open the bundle (directory, or zip extracted to a temporary directory)
//! 2. Parse the manifest; a shape failure is fatal
//! 3. Run structural and referential validation

#![allow(clippy::result_large_err)]

use super::options::BundleOptions;
use bundlecheck_core::model::Bundle;
use bundlecheck_core::rules::validation::{validate_bundle as run_validation, ValidationReport};
use bundlecheck_core::{log_op_end, log_op_error, log_op_start};
use bundlecheck_store::errors::Result;
use bundlecheck_store::{parse_manifest_file, BundleSource, FsBundleFiles};
use serde::Serialize;
use std::path::Path;

/// Result of validating one bundle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationOutcome {
    /// Basename of the input path
    pub bundle_name: String,
    pub report: ValidationReport,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.report.is_valid()
    }
}

/// A parsed bundle together with the location its files resolve against.
pub(crate) struct LoadedBundle {
    pub source: BundleSource,
    pub bundle: Bundle,
    pub report: ValidationReport,
}

impl LoadedBundle {
    pub fn files(&self) -> FsBundleFiles {
        FsBundleFiles::new(self.source.root())
    }
}

/// Open, parse and validate a bundle without logging an operation boundary.
pub(crate) fn load_bundle(input: &Path, options: &BundleOptions) -> Result<LoadedBundle> {
    let source = BundleSource::open(input)?;
    let manifest = source.manifest_path(&options.manifest_name)?;
    let bundle = parse_manifest_file(&manifest)?;
    let report = run_validation(&bundle, &FsBundleFiles::new(source.root()));
    Ok(LoadedBundle {
        source,
        bundle,
        report,
    })
}

/// Validate the bundle at `input`.
///
/// Validation findings are returned in the report, not as errors.
///
/// # Errors
///
/// - `Io` / `InvalidArchive` if the bundle cannot be opened
/// - `ManifestNotFound` if the manifest is absent
/// - `InvalidManifest` / `SchemaViolation` if the manifest has the wrong shape
pub fn validate_bundle(input: &Path, options: &BundleOptions) -> Result<ValidationOutcome> {
    log_op_start!("validate_bundle", bundle = %input.display());
    let start = std::time::Instant::now();

    let loaded = load_bundle(input, options).map_err(|e| {
        log_op_error!(
            "validate_bundle",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    let outcome = ValidationOutcome {
        bundle_name: loaded.source.display_name().to_string(),
        report: loaded.report,
    };

    log_op_end!(
        "validate_bundle",
        duration_ms = start.elapsed().as_millis() as u64,
        error_count = outcome.report.errors.len(),
        warning_count = outcome.report.warnings.len()
    );

    Ok(outcome)
}
