//! Common view over comparable bundle entities.

use crate::errors::{BcError, BcErrorKind, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Field name → value view of a record, absent optional fields omitted.
pub type FieldMap = BTreeMap<String, Value>;

/// Entity kind tag used to label difference records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityLabel {
    Bundle,
    Phase,
    Task,
    Solution,
    Leaderboard,
    Column,
}

impl EntityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Bundle => "Bundle",
            EntityLabel::Phase => "Phase",
            EntityLabel::Task => "Task",
            EntityLabel::Solution => "Solution",
            EntityLabel::Leaderboard => "Leaderboard",
            EntityLabel::Column => "Column",
        }
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An indexed manifest entity that can be scored, matched and diffed.
pub trait Record: Serialize {
    /// Kind tag of this entity
    const LABEL: EntityLabel;

    /// Current index (dense position after normalization)
    fn index(&self) -> i64;

    /// Author-supplied index retained by normalization, if normalized
    fn old_index(&self) -> Option<i64>;

    /// The author-supplied index whether or not the record was normalized
    fn original_index(&self) -> i64 {
        self.old_index().unwrap_or_else(|| self.index())
    }

    /// Serialized field view used for scoring and scalar diffing
    ///
    /// # Errors
    ///
    /// `Serialization` if the record does not serialize to a JSON object.
    fn field_map(&self) -> Result<FieldMap> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(BcError::new(BcErrorKind::Serialization)
                .with_op("field_map")
                .with_entity(Self::LABEL.as_str())
                .with_message(format!("record serialized to a non-object value: {}", other))),
        }
    }
}
