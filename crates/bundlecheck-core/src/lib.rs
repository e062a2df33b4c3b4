//! bundlecheck core - validation and differential comparison of competition bundles
//!
//! This crate provides the pure (I/O-free) half of bundlecheck:
//! - A typed model of a competition bundle manifest (tasks, solutions, phases, leaderboards)
//! - Structural/referential validation of a single bundle
//! - Normalization into a canonical, comparable form (re-indexing, file fingerprints,
//!   embedded task/solution references, canonical dates)
//! - Affinity scoring, greedy entity matching and recursive field-level diffing
//!   between two independently authored bundles
//!
//! All filesystem access goes through the [`files::BundleFiles`] trait.

pub mod diff;
pub mod errors;
pub mod files;
pub mod logging_facility;
pub mod model;
pub mod normalize;
pub mod rules;

// Re-export commonly used types
pub use diff::{compare_bundles, render_human_summary, BundleComparison, Difference, SideNames};
pub use errors::{BcError, BcErrorKind, BundleCheckError, Result};
pub use files::{BundleFiles, FileProbe, MemoryBundleFiles};
pub use model::Bundle;
pub use normalize::normalize_bundle;
pub use rules::validation::{validate_bundle, ValidationReport};
