//! Two-bundle comparison.
//!
//! ## Pipeline
//! 1. Load and validate each bundle independently
//! 2. If either is invalid, stop and return each failing bundle's report
//! 3. Normalize each bundle against its own files
//! 4. Match and diff the normalized bundles

#![allow(clippy::result_large_err)]

use super::options::BundleOptions;
use super::validate::{load_bundle, LoadedBundle};
use bundlecheck_core::diff::{compare_bundles as diff_bundles, BundleComparison, BundleSide, SideNames};
use bundlecheck_core::model::Bundle;
use bundlecheck_core::rules::validation::ValidationReport;
use bundlecheck_core::{log_op_end, log_op_error, log_op_start, normalize_bundle};
use bundlecheck_store::errors::Result;
use serde::Serialize;
use std::path::Path;

/// A bundle that failed validation and so was not compared.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidBundle {
    pub side: BundleSide,
    pub bundle_name: String,
    pub report: ValidationReport,
}

/// Result of comparing two bundles.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CompareOutcome {
    /// At least one bundle failed validation; no diff was computed
    Invalid { bundles: Vec<InvalidBundle> },
    /// Both bundles were valid and were compared
    Compared {
        bundle_a: String,
        bundle_b: String,
        comparison: BundleComparison,
    },
}

impl CompareOutcome {
    /// Display names for the two sides, when a comparison was made
    pub fn side_names(&self) -> Option<SideNames> {
        match self {
            CompareOutcome::Invalid { .. } => None,
            CompareOutcome::Compared {
                bundle_a, bundle_b, ..
            } => Some(SideNames::new(bundle_a.as_str(), bundle_b.as_str())),
        }
    }

    /// True when both bundles were valid and no differences were found
    pub fn is_identical(&self) -> bool {
        matches!(self, CompareOutcome::Compared { comparison, .. } if comparison.is_identical())
    }
}

/// Compare the bundles at `a` and `b`.
///
/// # Errors
///
/// Any fatal error from opening, parsing or normalizing either bundle.
pub fn compare_bundles(a: &Path, b: &Path, options: &BundleOptions) -> Result<CompareOutcome> {
    log_op_start!(
        "compare_bundles",
        bundle_a = %a.display(),
        bundle_b = %b.display()
    );
    let start = std::time::Instant::now();

    let outcome = compare_bundles_impl(a, b, options).map_err(|e| {
        log_op_error!(
            "compare_bundles",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    match &outcome {
        CompareOutcome::Invalid { bundles } => log_op_end!(
            "compare_bundles",
            duration_ms = start.elapsed().as_millis() as u64,
            invalid = bundles.len()
        ),
        CompareOutcome::Compared { comparison, .. } => log_op_end!(
            "compare_bundles",
            duration_ms = start.elapsed().as_millis() as u64,
            diff_count = comparison.differences.len()
        ),
    }

    Ok(outcome)
}

fn compare_bundles_impl(a: &Path, b: &Path, options: &BundleOptions) -> Result<CompareOutcome> {
    let loaded_a = load_bundle(a, options)?;
    let loaded_b = load_bundle(b, options)?;

    let invalid: Vec<InvalidBundle> = [(BundleSide::A, &loaded_a), (BundleSide::B, &loaded_b)]
        .into_iter()
        .filter(|(_, loaded)| !loaded.report.is_valid())
        .map(|(side, loaded)| InvalidBundle {
            side,
            bundle_name: loaded.source.display_name().to_string(),
            report: loaded.report.clone(),
        })
        .collect();
    if !invalid.is_empty() {
        return Ok(CompareOutcome::Invalid { bundles: invalid });
    }

    let canonical_a = normalize(&loaded_a)?;
    let canonical_b = normalize(&loaded_b)?;
    let comparison = diff_bundles(&canonical_a, &canonical_b)?;

    Ok(CompareOutcome::Compared {
        bundle_a: loaded_a.source.display_name().to_string(),
        bundle_b: loaded_b.source.display_name().to_string(),
        comparison,
    })
}

fn normalize(loaded: &LoadedBundle) -> Result<Bundle> {
    normalize_bundle(&loaded.bundle, &loaded.files()).map_err(|e| e.with_op("normalize_bundle"))
}
