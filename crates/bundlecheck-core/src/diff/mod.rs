//! Cross-bundle comparison.
//!
//! Works on normalized bundles (see [`crate::normalize`]):
//!
//! ```ignore
//! use bundlecheck_core::diff::{compare_bundles, render_human_summary, SideNames};
//!
//! let comparison = compare_bundles(&canonical_a, &canonical_b)?;
//! print!("{}", render_human_summary(&comparison, &SideNames::new("a.zip", "b.zip")));
//! ```
//!
//! Records are paired across bundles by affinity ([`similarity`]) using a
//! greedy matcher ([`matcher`]), so independently numbered bundles still line
//! up. Matching is deterministic but not optimal.

pub mod defaults;
pub mod engine;
pub mod human_summary;
pub mod matcher;
pub mod model;
pub mod similarity;

pub use engine::compare_bundles;
pub use human_summary::{render_human_summary, SideNames};
pub use model::{BundleComparison, BundleSide, Difference};
