//! Affinity scoring between two records of the same kind
//!
//! Only used to rank candidate pairings. Not a metric.

use crate::model::FieldMap;
use serde_json::Value;

/// Fields compared by fuzzy text ratio when their values differ.
const TEXT_FIELDS: [&str; 3] = ["title", "name", "description"];

/// The forward-reference shortcut field.
const KEY_FIELD: &str = "key";

/// Affinity of two field maps.
///
/// Each shared field scores 1 on exact equality, or the text ratio / 100 for
/// differing text fields. The sum is divided by the mean key count, where a
/// `key` field held by only one side does not count for that side.
pub fn score(a: &FieldMap, b: &FieldMap) -> f64 {
    let mut total = 0.0;
    for (field, value_a) in a {
        let Some(value_b) = b.get(field) else {
            continue;
        };
        if value_a == value_b {
            total += 1.0;
        } else if TEXT_FIELDS.contains(&field.as_str()) {
            total += text_similarity(value_a, value_b);
        }
    }

    let mut len_a = a.len() as f64;
    let mut len_b = b.len() as f64;
    let key_a = a.contains_key(KEY_FIELD);
    let key_b = b.contains_key(KEY_FIELD);
    if key_a && !key_b {
        len_a -= 1.0;
    }
    if key_b && !key_a {
        len_b -= 1.0;
    }

    let mean = (len_a + len_b) / 2.0;
    if mean <= 0.0 {
        return 0.0;
    }
    total / mean
}

fn text_similarity(a: &Value, b: &Value) -> f64 {
    match (a, b) {
        (Value::String(a), Value::String(b)) => f64::from(text_ratio(a, b)) / 100.0,
        _ => 0.0,
    }
}

/// Fuzzy text ratio in 0..=100.
///
/// `round(100 * (len_a + len_b - indel) / (len_a + len_b))` over Unicode
/// scalar values, where `indel` is the insert/delete edit distance. Two empty
/// strings score 100.
pub fn text_ratio(a: &str, b: &str) -> u32 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 100;
    }
    // indel distance = total - 2 * lcs
    let matched = 2 * longest_common_subsequence(&a, &b);
    (100.0 * matched as f64 / total as f64).round() as u32
}

fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut row = vec![0usize; b.len() + 1];
    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            row[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                row[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut row);
    }
    prev[b.len()]
}
