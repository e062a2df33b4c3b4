//! Per-run index bookkeeping
//!
//! One registry belongs to one validation run; nothing is shared between runs.

use std::collections::{BTreeMap, BTreeSet};

/// A collection whose `index` values must be unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IndexScope {
    Task,
    Solution,
    Phase,
    Leaderboard,
    /// Columns of the leaderboard at this position in the manifest
    Column(usize),
}

impl IndexScope {
    /// Noun used in duplicate-index messages
    pub fn noun(&self) -> &'static str {
        match self {
            IndexScope::Task => "task",
            IndexScope::Solution => "solution",
            IndexScope::Phase => "phase",
            IndexScope::Leaderboard => "leaderboard",
            IndexScope::Column(_) => "column",
        }
    }
}

#[derive(Debug, Default)]
pub struct IndexRegistry {
    seen: BTreeMap<IndexScope, BTreeSet<i64>>,
    duplicates: BTreeMap<IndexScope, Vec<i64>>,
}

impl IndexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an index. Returns false if the scope already held it.
    pub fn register(&mut self, scope: IndexScope, index: i64) -> bool {
        let fresh = self.seen.entry(scope).or_default().insert(index);
        if !fresh {
            self.duplicates.entry(scope).or_default().push(index);
        }
        fresh
    }

    /// Repeated occurrences in registration order, one entry per repeat
    pub fn duplicates(&self, scope: IndexScope) -> &[i64] {
        self.duplicates.get(&scope).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, scope: IndexScope, index: i64) -> bool {
        self.seen
            .get(&scope)
            .is_some_and(|indexes| indexes.contains(&index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_listed_once_per_repeat() {
        let mut registry = IndexRegistry::new();
        for i in [0, 1, 1, 2, 1] {
            registry.register(IndexScope::Task, i);
        }
        assert_eq!(registry.duplicates(IndexScope::Task), &[1, 1]);
        assert!(registry.duplicates(IndexScope::Phase).is_empty());
    }

    #[test]
    fn test_column_scopes_are_per_leaderboard() {
        let mut registry = IndexRegistry::new();
        assert!(registry.register(IndexScope::Column(0), 3));
        assert!(registry.register(IndexScope::Column(1), 3));
        assert!(!registry.register(IndexScope::Column(0), 3));
        assert!(registry.contains(IndexScope::Column(1), 3));
        assert!(!registry.contains(IndexScope::Task, 3));
    }
}
