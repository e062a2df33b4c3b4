//! Phase entity

use super::record::{EntityLabel, FieldMap, Record};
use super::solution::Solution;
use super::task::Task;
use serde::{Deserialize, Serialize};

/// A phase's reference to a task: an index as authored, the task itself once normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskRef {
    Index(i64),
    Embedded(Box<Task>),
}

/// A phase's reference to a solution: an index as authored, the solution itself once normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SolutionRef {
    Index(i64),
    Embedded(Box<Solution>),
}

impl TaskRef {
    /// The author-supplied task index this reference resolves through
    pub fn original_index(&self) -> i64 {
        match self {
            TaskRef::Index(i) => *i,
            TaskRef::Embedded(task) => task.original_index(),
        }
    }
}

impl SolutionRef {
    /// The author-supplied solution index this reference resolves through
    pub fn original_index(&self) -> i64 {
        match self {
            SolutionRef::Index(i) => *i,
            SolutionRef::Embedded(solution) => solution.original_index(),
        }
    }
}

/// A competition phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub index: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_index: Option<i64>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Date-like string; RFC 3339 UTC after normalization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_submissions: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_submissions_per_day: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time_limit_ms: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,

    #[serde(default)]
    pub tasks: Vec<TaskRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solutions: Option<Vec<SolutionRef>>,

    #[serde(flatten)]
    pub extra: FieldMap,
}

impl Phase {
    /// Tasks embedded by normalization; index-only references are skipped
    pub fn embedded_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter_map(|t| match t {
                TaskRef::Embedded(task) => Some(task.as_ref()),
                TaskRef::Index(_) => None,
            })
            .collect()
    }

    /// Solutions embedded by normalization; index-only references are skipped
    pub fn embedded_solutions(&self) -> Vec<&Solution> {
        self.solutions
            .iter()
            .flatten()
            .filter_map(|s| match s {
                SolutionRef::Embedded(solution) => Some(solution.as_ref()),
                SolutionRef::Index(_) => None,
            })
            .collect()
    }
}

impl Record for Phase {
    const LABEL: EntityLabel = EntityLabel::Phase;

    fn index(&self) -> i64 {
        self.index
    }

    fn old_index(&self) -> Option<i64> {
        self.old_index
    }
}
