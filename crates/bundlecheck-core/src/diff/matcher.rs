//! Greedy pairing of records across two bundles
//!
//! Repeatedly takes the highest remaining affinity, then removes its row and
//! column. This is a greedy approximation, not an optimal assignment: an
//! early pick can block a better overall pairing. Ties go to the first cell
//! in row-major order.

use super::similarity::score;
use crate::errors::Result;
use crate::model::{FieldMap, Record};

/// Pair up two lists of field maps.
///
/// Returns `(position_in_a, position_in_b)` pairs in the order they were
/// picked. Cells scoring 0 or less are never paired.
pub fn match_field_maps(a: &[FieldMap], b: &[FieldMap]) -> Vec<(usize, usize)> {
    let mut matrix: Vec<Vec<f64>> = a
        .iter()
        .map(|row| b.iter().map(|col| score(row, col)).collect())
        .collect();

    let mut pairs = Vec::new();
    while let Some((row, col)) = best_cell(&matrix) {
        pairs.push((row, col));
        for value in matrix[row].iter_mut() {
            *value = 0.0;
        }
        for other in matrix.iter_mut() {
            other[col] = 0.0;
        }
    }
    pairs
}

/// First strictly greatest positive cell in row-major order
fn best_cell(matrix: &[Vec<f64>]) -> Option<(usize, usize)> {
    let mut best = 0.0;
    let mut position = None;
    for (row, values) in matrix.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            if *value > best {
                best = *value;
                position = Some((row, col));
            }
        }
    }
    position
}

/// Pair up two lists of records by affinity.
///
/// # Errors
///
/// `Serialization` if a record cannot be viewed as a field map.
pub fn match_records<R: Record>(a: &[&R], b: &[&R]) -> Result<Vec<(usize, usize)>> {
    let maps_a = field_maps(a)?;
    let maps_b = field_maps(b)?;
    let pairs = match_field_maps(&maps_a, &maps_b);
    tracing::debug!(
        label = %R::LABEL,
        left = a.len(),
        right = b.len(),
        matched = pairs.len(),
        "records matched"
    );
    Ok(pairs)
}

fn field_maps<R: Record>(records: &[&R]) -> Result<Vec<FieldMap>> {
    records.iter().map(|record| record.field_map()).collect()
}
