//! Shape checks serde cannot express
//!
//! Run right after the manifest deserializes. Any message returned here makes
//! the document fail the schema gate as a whole.

use crate::model::Bundle;
use crate::normalize::dates::parse_instant;

/// Check index signs and phase date syntax.
///
/// Returns one message per violation, in document order.
pub fn check_shape(bundle: &Bundle) -> Vec<String> {
    let mut violations = Vec::new();

    let mut non_negative = |path: String, index: i64| {
        if index < 0 {
            violations.push(format!("{}.index: {} is negative", path, index));
        }
    };

    for (pos, task) in bundle.tasks.iter().enumerate() {
        non_negative(format!("tasks[{}]", pos), task.index);
    }
    for (pos, solution) in bundle.solutions().iter().enumerate() {
        non_negative(format!("solutions[{}]", pos), solution.index);
    }
    for (pos, phase) in bundle.phases.iter().enumerate() {
        non_negative(format!("phases[{}]", pos), phase.index);
    }
    for (pos, leaderboard) in bundle.leaderboards.iter().enumerate() {
        non_negative(format!("leaderboards[{}]", pos), leaderboard.index);
        for (col, column) in leaderboard.columns.iter().enumerate() {
            non_negative(format!("leaderboards[{}].columns[{}]", pos, col), column.index);
        }
    }

    for (pos, phase) in bundle.phases.iter().enumerate() {
        for (field, value) in [("start", &phase.start), ("end", &phase.end)] {
            if let Some(value) = value {
                if parse_instant(value).is_none() {
                    violations.push(format!("phases[{}].{}: '{}' is not a date", pos, field, value));
                }
            }
        }
    }

    violations
}
