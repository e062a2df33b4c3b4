//! bundlecheck engine - orchestration layer
//!
//! Composes the store (locating and parsing bundles) with the core
//! (validation, normalization, comparison) into the two user-facing
//! commands, and owns their operation-level logging.

pub mod commands;

pub use commands::compare::{compare_bundles, CompareOutcome, InvalidBundle};
pub use commands::engine_command::{apply_engine_command, EngineCommand, EngineCommandResult};
pub use commands::options::BundleOptions;
pub use commands::validate::{validate_bundle, ValidationOutcome};
