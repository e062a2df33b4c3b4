//! Task entity

use super::file_ref::FileRef;
use super::record::{EntityLabel, FieldMap, Record};
use serde::{Deserialize, Serialize};

/// File-valued task fields, in the order they are checked and fingerprinted.
pub const TASK_FILE_FIELDS: [&str; 4] = [
    "scoring_program",
    "ingestion_program",
    "reference_data",
    "input_data",
];

/// A task definition, or a bare `key` reference to a task defined elsewhere.
///
/// When `key` is present every other field except `index` is ignored on
/// upload, so none of them are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Author-supplied index, unique among tasks (dense position after normalization)
    pub index: i64,

    /// Author-supplied index, set by normalization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_index: Option<i64>,

    /// Forward reference to an existing task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring_program: Option<FileRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingestion_program: Option<FileRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_data: Option<FileRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_data: Option<FileRef>,

    /// Fields the model does not name
    #[serde(flatten)]
    pub extra: FieldMap,
}

impl Task {
    /// True if this task is a `key` forward reference
    pub fn is_key_reference(&self) -> bool {
        self.key.is_some()
    }

    /// True if fields other than `key` and `index` are present
    pub fn has_fields_beside_key(&self) -> bool {
        self.name.is_some()
            || self.description.is_some()
            || self.is_public.is_some()
            || !self.file_refs().is_empty()
            || !self.extra.is_empty()
    }

    /// Present file references, paired with their field names
    pub fn file_refs(&self) -> Vec<(&'static str, &FileRef)> {
        [
            (TASK_FILE_FIELDS[0], self.scoring_program.as_ref()),
            (TASK_FILE_FIELDS[1], self.ingestion_program.as_ref()),
            (TASK_FILE_FIELDS[2], self.reference_data.as_ref()),
            (TASK_FILE_FIELDS[3], self.input_data.as_ref()),
        ]
        .into_iter()
        .filter_map(|(field, file)| file.map(|f| (field, f)))
        .collect()
    }

    /// Mutable access to present file references
    pub fn file_refs_mut(&mut self) -> Vec<(&'static str, &mut FileRef)> {
        [
            (TASK_FILE_FIELDS[0], self.scoring_program.as_mut()),
            (TASK_FILE_FIELDS[1], self.ingestion_program.as_mut()),
            (TASK_FILE_FIELDS[2], self.reference_data.as_mut()),
            (TASK_FILE_FIELDS[3], self.input_data.as_mut()),
        ]
        .into_iter()
        .filter_map(|(field, file)| file.map(|f| (field, f)))
        .collect()
    }
}

impl Record for Task {
    const LABEL: EntityLabel = EntityLabel::Task;

    fn index(&self) -> i64 {
        self.index
    }

    fn old_index(&self) -> Option<i64> {
        self.old_index
    }
}
