//! Bundle comparison output types.
//!
//! Difference records are plain facts: which kind of entity, which author
//! index on each side, which field, and both values. Rendering to text lives
//! in [`super::human_summary`].

use crate::model::EntityLabel;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which of the two compared bundles a record refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BundleSide {
    A,
    B,
}

impl BundleSide {
    pub fn other(&self) -> BundleSide {
        match self {
            BundleSide::A => BundleSide::B,
            BundleSide::B => BundleSide::A,
        }
    }
}

/// One semantic difference between two bundles.
///
/// Indexes are author-supplied (`old_index`), never the dense positions
/// assigned by normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Difference {
    /// A field present on both sides with different values.
    /// Root-level fields carry no indexes.
    MismatchedValues {
        label: EntityLabel,
        index_a: Option<i64>,
        index_b: Option<i64>,
        field: String,
        value_a: Value,
        value_b: Value,
    },
    /// A defaulted field set on one side to something other than its default
    /// while the other side omits it
    DefaultValueChange {
        label: EntityLabel,
        index_a: i64,
        index_b: i64,
        field: String,
        value_a: Option<Value>,
        value_b: Option<Value>,
        default: Value,
    },
    /// A field without a default present on one side only
    MissingValue {
        label: EntityLabel,
        index_a: i64,
        index_b: i64,
        field: String,
        value_a: Option<Value>,
        value_b: Option<Value>,
    },
    /// An entity on `side` that was not paired with anything on the other side
    NoEquivalentValue {
        side: BundleSide,
        label: EntityLabel,
        index: i64,
    },
    /// Root file fingerprints differ
    FileMismatch {
        label: EntityLabel,
        field: String,
        value_a: String,
        value_b: String,
    },
}

impl Difference {
    /// Field the record is about, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Difference::MismatchedValues { field, .. }
            | Difference::DefaultValueChange { field, .. }
            | Difference::MissingValue { field, .. }
            | Difference::FileMismatch { field, .. } => Some(field),
            Difference::NoEquivalentValue { .. } => None,
        }
    }

    pub fn label(&self) -> EntityLabel {
        match self {
            Difference::MismatchedValues { label, .. }
            | Difference::DefaultValueChange { label, .. }
            | Difference::MissingValue { label, .. }
            | Difference::NoEquivalentValue { label, .. }
            | Difference::FileMismatch { label, .. } => *label,
        }
    }
}

/// All differences found between two normalized bundles, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BundleComparison {
    pub differences: Vec<Difference>,
}

impl BundleComparison {
    /// True when no significant differences were found
    pub fn is_identical(&self) -> bool {
        self.differences.is_empty()
    }
}
