//! Recursive bundle differ.
//!
//! Each entity kind has its own diff function. A record's own fields are
//! compared first, in field-name order, then its nested collections are
//! matched and diffed:
//!
//! | Kind        | Nested                      | Unmatched reported |
//! |-------------|-----------------------------|--------------------|
//! | Phase       | tasks, solutions            | tasks only         |
//! | Leaderboard | columns                     | no                 |
//! | Solution    | (its `tasks` are skipped)   | -                  |
//! | Task/Column | none                        | -                  |

use super::defaults::default_for;
use super::matcher::match_records;
use super::model::{BundleComparison, BundleSide, Difference};
use crate::errors::Result;
use crate::model::{Bundle, Column, EntityLabel, Leaderboard, Phase, Record, Solution, Task};
use serde_json::Value;

/// Positional bookkeeping fields, never diffed.
const INDEX_FIELDS: [&str; 2] = ["index", "old_index"];

/// Compare two normalized bundles.
///
/// # Errors
///
/// `Serialization` if a record cannot be viewed as a field map.
pub fn compare_bundles(a: &Bundle, b: &Bundle) -> Result<BundleComparison> {
    let mut differences = Vec::new();

    if a.title != b.title {
        differences.push(Difference::MismatchedValues {
            label: EntityLabel::Bundle,
            index_a: None,
            index_b: None,
            field: "title".to_string(),
            value_a: Value::String(a.title.clone()),
            value_b: Value::String(b.title.clone()),
        });
    }

    if a.image != b.image {
        differences.push(Difference::FileMismatch {
            label: EntityLabel::Bundle,
            field: "image".to_string(),
            value_a: a.image.as_str().to_string(),
            value_b: b.image.as_str().to_string(),
        });
    }

    let phases_a: Vec<&Phase> = a.phases.iter().collect();
    let phases_b: Vec<&Phase> = b.phases.iter().collect();
    let pairs = match_records(&phases_a, &phases_b)?;
    for &(i, j) in &pairs {
        differences.extend(diff_phase(phases_a[i], phases_b[j])?);
    }
    differences.extend(unmatched(&phases_a, &phases_b, &pairs));

    let leaderboards_a: Vec<&Leaderboard> = a.leaderboards.iter().collect();
    let leaderboards_b: Vec<&Leaderboard> = b.leaderboards.iter().collect();
    for (i, j) in match_records(&leaderboards_a, &leaderboards_b)? {
        differences.extend(diff_leaderboard(leaderboards_a[i], leaderboards_b[j])?);
    }

    tracing::debug!(differences = differences.len(), "bundles compared");

    Ok(BundleComparison { differences })
}

/// Diff two matched phases, including their embedded tasks and solutions.
///
/// # Errors
///
/// `Serialization` if a record cannot be viewed as a field map.
pub fn diff_phase(a: &Phase, b: &Phase) -> Result<Vec<Difference>> {
    let mut differences = diff_fields(a, b, &["tasks", "solutions"])?;

    let tasks_a = a.embedded_tasks();
    let tasks_b = b.embedded_tasks();
    let pairs = match_records(&tasks_a, &tasks_b)?;
    for &(i, j) in &pairs {
        differences.extend(diff_task(tasks_a[i], tasks_b[j])?);
    }
    differences.extend(unmatched(&tasks_a, &tasks_b, &pairs));

    // Unmatched solutions are not reported
    if a.solutions.is_some() && b.solutions.is_some() {
        let solutions_a = a.embedded_solutions();
        let solutions_b = b.embedded_solutions();
        for (i, j) in match_records(&solutions_a, &solutions_b)? {
            differences.extend(diff_solution(solutions_a[i], solutions_b[j])?);
        }
    }

    Ok(differences)
}

/// # Errors
///
/// `Serialization` if a record cannot be viewed as a field map.
pub fn diff_task(a: &Task, b: &Task) -> Result<Vec<Difference>> {
    diff_fields(a, b, &[])
}

/// Solutions cite tasks by identity, so their `tasks` lists are not compared.
///
/// # Errors
///
/// `Serialization` if a record cannot be viewed as a field map.
pub fn diff_solution(a: &Solution, b: &Solution) -> Result<Vec<Difference>> {
    diff_fields(a, b, &["tasks"])
}

/// # Errors
///
/// `Serialization` if a record cannot be viewed as a field map.
pub fn diff_leaderboard(a: &Leaderboard, b: &Leaderboard) -> Result<Vec<Difference>> {
    let mut differences = diff_fields(a, b, &["columns"])?;

    let columns_a: Vec<&Column> = a.columns.iter().collect();
    let columns_b: Vec<&Column> = b.columns.iter().collect();
    for (i, j) in match_records(&columns_a, &columns_b)? {
        differences.extend(diff_column(columns_a[i], columns_b[j])?);
    }

    Ok(differences)
}

/// # Errors
///
/// `Serialization` if a record cannot be viewed as a field map.
pub fn diff_column(a: &Column, b: &Column) -> Result<Vec<Difference>> {
    diff_fields(a, b, &[])
}

/// Compare the own fields of two records.
///
/// `nested` names collection fields the caller diffs itself; they are still
/// reported when only one side has them.
fn diff_fields<R: Record>(a: &R, b: &R, nested: &[&str]) -> Result<Vec<Difference>> {
    let fields_a = a.field_map()?;
    let fields_b = b.field_map()?;
    let index_a = a.original_index();
    let index_b = b.original_index();
    let mut differences = Vec::new();

    for (field, value_a) in &fields_a {
        if INDEX_FIELDS.contains(&field.as_str()) {
            continue;
        }
        match fields_b.get(field) {
            None => differences.extend(one_sided(
                R::LABEL,
                field,
                BundleSide::A,
                value_a,
                (index_a, index_b),
            )),
            Some(_) if nested.contains(&field.as_str()) => {}
            Some(value_b) if value_a != value_b => {
                differences.push(Difference::MismatchedValues {
                    label: R::LABEL,
                    index_a: Some(index_a),
                    index_b: Some(index_b),
                    field: field.clone(),
                    value_a: value_a.clone(),
                    value_b: value_b.clone(),
                });
            }
            Some(_) => {}
        }
    }

    for (field, value_b) in &fields_b {
        if INDEX_FIELDS.contains(&field.as_str()) || fields_a.contains_key(field) {
            continue;
        }
        differences.extend(one_sided(
            R::LABEL,
            field,
            BundleSide::B,
            value_b,
            (index_a, index_b),
        ));
    }

    Ok(differences)
}

/// A field present only on `side`.
fn one_sided(
    label: EntityLabel,
    field: &str,
    side: BundleSide,
    value: &Value,
    (index_a, index_b): (i64, i64),
) -> Option<Difference> {
    if field == "key" {
        return None;
    }

    let (value_a, value_b) = match side {
        BundleSide::A => (Some(value.clone()), None),
        BundleSide::B => (None, Some(value.clone())),
    };

    match default_for(field) {
        Some(default) if *value == default => None,
        Some(default) => Some(Difference::DefaultValueChange {
            label,
            index_a,
            index_b,
            field: field.to_string(),
            value_a,
            value_b,
            default,
        }),
        None => Some(Difference::MissingValue {
            label,
            index_a,
            index_b,
            field: field.to_string(),
            value_a,
            value_b,
        }),
    }
}

/// Records on either side left out of `pairs`
fn unmatched<R: Record>(a: &[&R], b: &[&R], pairs: &[(usize, usize)]) -> Vec<Difference> {
    let mut differences = Vec::new();
    let sides = [(BundleSide::A, a), (BundleSide::B, b)];
    for (side, records) in sides {
        for (pos, record) in records.iter().enumerate() {
            let paired = pairs.iter().any(|&(i, j)| match side {
                BundleSide::A => i == pos,
                BundleSide::B => j == pos,
            });
            if !paired {
                differences.push(Difference::NoEquivalentValue {
                    side,
                    label: R::LABEL,
                    index: record.original_index(),
                });
            }
        }
    }
    differences
}
