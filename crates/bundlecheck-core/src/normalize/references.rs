//! Reference resolution and dense re-indexing

use crate::errors::{BundleCheckError, Result};
use crate::model::{Phase, Record, Solution, SolutionRef, Task, TaskRef};
use std::collections::BTreeMap;

/// Sort by author index and assign dense positions, keeping the author index
/// as `old_index`.
///
/// Already-normalized records sort by their retained `old_index`, so a second
/// pass assigns the same positions.
pub fn reindex<R: Record>(records: &mut [R], assign: impl Fn(&mut R, i64, i64)) {
    records.sort_by_key(|record| record.original_index());
    for (pos, record) in records.iter_mut().enumerate() {
        let original = record.original_index();
        assign(record, pos as i64, original);
    }
}

pub fn reindex_tasks(tasks: &mut [Task]) {
    reindex(tasks, |task, index, old_index| {
        task.index = index;
        task.old_index = Some(old_index);
    });
}

pub fn reindex_phases(phases: &mut [Phase]) {
    reindex(phases, |phase, index, old_index| {
        phase.index = index;
        phase.old_index = Some(old_index);
    });
}

/// Lookup of records by author index
pub fn by_original_index<R: Record + Clone>(records: &[R]) -> BTreeMap<i64, R> {
    records
        .iter()
        .map(|record| (record.original_index(), record.clone()))
        .collect()
}

/// Replace a phase's task and solution indexes with the records they cite,
/// preserving the authored order.
///
/// # Errors
///
/// `DanglingReference` if a cited index is absent from the lookup.
pub fn embed_references(
    phase: &mut Phase,
    tasks: &BTreeMap<i64, Task>,
    solutions: &BTreeMap<i64, Solution>,
) -> Result<()> {
    let mut embedded_tasks = Vec::with_capacity(phase.tasks.len());
    for task_ref in &phase.tasks {
        let index = task_ref.original_index();
        let task = tasks.get(&index).ok_or_else(|| BundleCheckError::PhaseTaskMissing {
            phase: phase.name.clone(),
            index,
        })?;
        embedded_tasks.push(TaskRef::Embedded(Box::new(task.clone())));
    }
    phase.tasks = embedded_tasks;

    if let Some(refs) = &phase.solutions {
        let mut embedded_solutions = Vec::with_capacity(refs.len());
        for solution_ref in refs {
            let index = solution_ref.original_index();
            let solution =
                solutions
                    .get(&index)
                    .ok_or_else(|| BundleCheckError::PhaseSolutionMissing {
                        phase: phase.name.clone(),
                        index,
                    })?;
            embedded_solutions.push(SolutionRef::Embedded(Box::new(solution.clone())));
        }
        phase.solutions = Some(embedded_solutions);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BcErrorKind;
    use serde_json::json;

    fn task(index: i64, name: &str) -> Task {
        serde_json::from_value(json!({"index": index, "name": name})).unwrap()
    }

    #[test]
    fn test_reindex_is_dense_and_keeps_author_index() {
        let mut tasks = vec![task(7, "c"), task(2, "a"), task(5, "b")];
        reindex_tasks(&mut tasks);

        let view: Vec<(i64, Option<i64>, Option<&str>)> = tasks
            .iter()
            .map(|t| (t.index, t.old_index, t.name.as_deref()))
            .collect();
        assert_eq!(
            view,
            vec![(0, Some(2), Some("a")), (1, Some(5), Some("b")), (2, Some(7), Some("c"))]
        );

        reindex_tasks(&mut tasks);
        assert_eq!(tasks[2].old_index, Some(7));
        assert_eq!(tasks[2].index, 2);
    }

    #[test]
    fn test_embed_keeps_authored_order() {
        let mut tasks = vec![task(10, "x"), task(20, "y")];
        reindex_tasks(&mut tasks);
        let lookup = by_original_index(&tasks);

        let mut phase: Phase = serde_json::from_value(json!({
            "index": 0, "name": "Dev", "tasks": [20, 10]
        }))
        .unwrap();
        embed_references(&mut phase, &lookup, &BTreeMap::new()).unwrap();

        let names: Vec<_> = phase
            .embedded_tasks()
            .iter()
            .map(|t| t.name.clone().unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["y", "x"]);
    }

    #[test]
    fn test_dangling_reference_fails_loudly() {
        let mut phase: Phase = serde_json::from_value(json!({
            "index": 0, "name": "Dev", "tasks": [], "solutions": [3]
        }))
        .unwrap();
        let err = embed_references(&mut phase, &BTreeMap::new(), &BTreeMap::new()).unwrap_err();
        assert_eq!(err.kind(), BcErrorKind::DanglingReference);
    }
}
