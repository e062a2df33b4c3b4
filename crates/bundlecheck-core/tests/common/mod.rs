use bundlecheck_core::files::MemoryBundleFiles;
use bundlecheck_core::model::Bundle;
use serde_json::{json, Value};

pub const LOGO: &[u8] = b"logo bytes";
pub const SCORING: &[u8] = b"scoring program bytes";

/// Parse a bundle from a JSON value shaped like the YAML manifest
#[allow(dead_code)]
pub fn bundle(value: Value) -> Bundle {
    serde_json::from_value(value).unwrap()
}

/// A complete task definition
#[allow(dead_code)]
pub fn task(index: i64, name: &str) -> Value {
    json!({
        "index": index,
        "name": name,
        "description": format!("{} description", name),
        "scoring_program": "scoring.zip"
    })
}

/// A phase citing the given task indexes
#[allow(dead_code)]
pub fn phase(index: i64, name: &str, tasks: &[i64]) -> Value {
    json!({
        "index": index,
        "name": name,
        "description": format!("The {} phase", name),
        "start": "2024-01-01",
        "tasks": tasks
    })
}

/// A leaderboard with one accuracy column
#[allow(dead_code)]
pub fn leaderboard(index: i64, key: &str) -> Value {
    json!({
        "index": index,
        "title": "Results",
        "key": key,
        "columns": [{"index": 0, "key": "accuracy", "title": "Accuracy"}]
    })
}

/// A small valid bundle: two tasks, two phases, one leaderboard
#[allow(dead_code)]
pub fn sample_bundle_value(title: &str) -> Value {
    json!({
        "title": title,
        "image": "logo.png",
        "pages": [{"title": "Overview", "file": "overview.md"}],
        "tasks": [task(0, "Classification"), task(1, "Regression")],
        "solutions": [
            {"index": 0, "name": "Baseline", "path": "baseline.zip", "tasks": [0, 1]}
        ],
        "phases": [
            phase(0, "Development", &[0, 1]),
            phase(1, "Final", &[1])
        ],
        "leaderboards": [leaderboard(0, "main")]
    })
}

#[allow(dead_code)]
pub fn sample_bundle(title: &str) -> Bundle {
    bundle(sample_bundle_value(title))
}

/// Files referenced by [`sample_bundle`]
#[allow(dead_code)]
pub fn sample_files() -> MemoryBundleFiles {
    MemoryBundleFiles::new()
        .with_file("logo.png", LOGO.to_vec())
        .with_file("overview.md", b"# Overview".to_vec())
        .with_file("scoring.zip", SCORING.to_vec())
        .with_file("baseline.zip", b"baseline".to_vec())
}
