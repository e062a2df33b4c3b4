//! Solution entity

use super::file_ref::FileRef;
use super::record::{EntityLabel, FieldMap, Record};
use serde::{Deserialize, Serialize};

/// A reference solution and the tasks it solves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub index: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_index: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub path: FileRef,

    /// Indexes into the bundle's task collection
    #[serde(default)]
    pub tasks: Vec<i64>,

    #[serde(flatten)]
    pub extra: FieldMap,
}

impl Solution {
    /// Name used in validation messages
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

impl Record for Solution {
    const LABEL: EntityLabel = EntityLabel::Solution;

    fn index(&self) -> i64 {
        self.index
    }

    fn old_index(&self) -> Option<i64> {
        self.old_index
    }
}
