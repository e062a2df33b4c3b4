//! Fields whose absence means a known default value

use serde_json::{json, Value};

/// Default value of a defaulted field, for any entity kind.
pub fn default_for(field: &str) -> Option<Value> {
    let value = match field {
        "is_public" => json!(false),
        "max_submissions" => Value::Null,
        "max_submissions_per_day" => Value::Null,
        "execution_time_limit_ms" => json!(600),
        "sorting" => json!("desc"),
        "computation" => Value::Null,
        "computation_indexes" => Value::Null,
        _ => return None,
    };
    Some(value)
}
