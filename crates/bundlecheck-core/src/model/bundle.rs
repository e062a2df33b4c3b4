//! Bundle root entity

use super::file_ref::FileRef;
use super::leaderboard::Leaderboard;
use super::phase::Phase;
use super::record::FieldMap;
use super::solution::Solution;
use super::task::Task;
use serde::{Deserialize, Serialize};

/// A parsed competition bundle manifest.
///
/// The same type holds both the authored form and the normalized form; see
/// [`crate::normalize::normalize_bundle`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub title: String,

    /// Logo image shown for the competition
    pub image: FileRef,

    #[serde(default)]
    pub pages: Vec<Page>,

    pub tasks: Vec<Task>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solutions: Option<Vec<Solution>>,

    pub phases: Vec<Phase>,

    pub leaderboards: Vec<Leaderboard>,

    /// Top-level fields the model does not name
    #[serde(flatten)]
    pub extra: FieldMap,
}

impl Bundle {
    /// Solutions, or an empty slice when the bundle declares none
    pub fn solutions(&self) -> &[Solution] {
        self.solutions.as_deref().unwrap_or(&[])
    }
}

/// A static content page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    pub file: FileRef,

    #[serde(flatten)]
    pub extra: FieldMap,
}
