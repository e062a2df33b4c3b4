//! Leaderboard and column entities
//!
//! Leaderboards carry no file or cross-collection references, so
//! normalization leaves them untouched.

use super::record::{EntityLabel, FieldMap, Record};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub index: i64,
    pub title: String,
    pub key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,

    #[serde(default)]
    pub columns: Vec<Column>,

    #[serde(flatten)]
    pub extra: FieldMap,
}

impl Record for Leaderboard {
    const LABEL: EntityLabel = EntityLabel::Leaderboard;

    fn index(&self) -> i64 {
        self.index
    }

    fn old_index(&self) -> Option<i64> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub index: i64,
    pub key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorting: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computation_indexes: Option<Vec<i64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal_places: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,

    #[serde(flatten)]
    pub extra: FieldMap,
}

impl Record for Column {
    const LABEL: EntityLabel = EntityLabel::Column;

    fn index(&self) -> i64 {
        self.index
    }

    fn old_index(&self) -> Option<i64> {
        None
    }
}
