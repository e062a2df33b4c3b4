//! Engine-level commands dispatched by front ends.

#![allow(clippy::result_large_err)]

use crate::commands::compare::{compare_bundles, CompareOutcome};
use crate::commands::options::BundleOptions;
use crate::commands::validate::{validate_bundle, ValidationOutcome};
use bundlecheck_store::errors::Result;
use std::path::PathBuf;

/// Engine-level commands that read bundles from disk.
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Validate a single bundle.
    Validate {
        input: PathBuf,
        options: BundleOptions,
    },
    /// Validate two bundles and, if both are valid, diff them.
    Compare {
        a: PathBuf,
        b: PathBuf,
        options: BundleOptions,
    },
}

/// Result of applying an engine command.
#[derive(Debug, Clone)]
pub enum EngineCommandResult {
    Validate(ValidationOutcome),
    Compare(CompareOutcome),
}

/// Apply an engine command.
///
/// # Errors
///
/// Whatever the underlying command returns as fatal.
pub fn apply_engine_command(cmd: EngineCommand) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::Validate { input, options } => {
            validate_bundle(&input, &options).map(EngineCommandResult::Validate)
        }
        EngineCommand::Compare { a, b, options } => {
            compare_bundles(&a, &b, &options).map(EngineCommandResult::Compare)
        }
    }
}
