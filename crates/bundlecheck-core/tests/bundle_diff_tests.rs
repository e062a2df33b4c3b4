#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use bundlecheck_core::diff::engine::diff_phase;
use bundlecheck_core::diff::{BundleSide, SideNames};
use bundlecheck_core::files::MemoryBundleFiles;
use bundlecheck_core::model::{Bundle, EntityLabel};
use bundlecheck_core::{compare_bundles, normalize_bundle, render_human_summary, Difference};
use common::{bundle, phase, sample_bundle_value, sample_files, task};
use serde_json::{json, Value};

fn normalized(value: Value) -> Bundle {
    normalize_bundle(&bundle(value), &sample_files()).unwrap()
}

#[test]
fn test_identical_bundles_have_no_differences() {
    let a = normalized(sample_bundle_value("Comp"));
    let b = normalized(sample_bundle_value("Comp"));
    let comparison = compare_bundles(&a, &b).unwrap();
    assert!(comparison.is_identical(), "{:?}", comparison.differences);
}

#[test]
fn test_title_mismatch_only() {
    let a = normalized(sample_bundle_value("Comp A"));
    let b = normalized(sample_bundle_value("Comp B"));

    let comparison = compare_bundles(&a, &b).unwrap();

    assert_eq!(
        comparison.differences,
        vec![Difference::MismatchedValues {
            label: EntityLabel::Bundle,
            index_a: None,
            index_b: None,
            field: "title".to_string(),
            value_a: json!("Comp A"),
            value_b: json!("Comp B"),
        }]
    );
}

#[test]
fn test_explicit_default_equals_absent_field() {
    let a = normalized(sample_bundle_value("Comp"));
    let mut value_b = sample_bundle_value("Comp");
    value_b["tasks"][0]["execution_time_limit_ms"] = json!(600);
    let b = normalized(value_b);

    let comparison = compare_bundles(&a, &b).unwrap();

    assert!(comparison.is_identical(), "{:?}", comparison.differences);
}

#[test]
fn test_non_default_value_reported_as_default_change() {
    let a = normalized(sample_bundle_value("Comp"));
    let mut value_b = sample_bundle_value("Comp");
    value_b["phases"][1]["execution_time_limit_ms"] = json!(1200);
    let b = normalized(value_b);

    let comparison = compare_bundles(&a, &b).unwrap();

    assert_eq!(
        comparison.differences,
        vec![Difference::DefaultValueChange {
            label: EntityLabel::Phase,
            index_a: 1,
            index_b: 1,
            field: "execution_time_limit_ms".to_string(),
            value_a: None,
            value_b: Some(json!(1200)),
            default: json!(600),
        }]
    );
}

#[test]
fn test_unmatched_phase_reported_by_author_index() {
    let mut value_a = sample_bundle_value("Comp");
    value_a["phases"] = json!([
        phase(0, "Development", &[0, 1]),
        {"index": 1, "name": "zzz", "tasks": []}
    ]);
    let mut value_b = sample_bundle_value("Comp");
    value_b["phases"] = json!([phase(0, "Development", &[0, 1])]);

    let comparison = compare_bundles(&normalized(value_a), &normalized(value_b)).unwrap();

    assert_eq!(
        comparison.differences,
        vec![Difference::NoEquivalentValue {
            side: BundleSide::A,
            label: EntityLabel::Phase,
            index: 1,
        }]
    );
}

#[test]
fn test_independent_numbering_and_file_names_compare_equal() {
    let value_a = sample_bundle_value("Comp");

    // Same content, different author indexes, listing order and file names
    let mut value_b = sample_bundle_value("Comp");
    let mut regression = task(20, "Regression");
    regression["scoring_program"] = json!("programs/score_v2.zip");
    let mut classification = task(10, "Classification");
    classification["scoring_program"] = json!("programs/score_v2.zip");
    value_b["tasks"] = json!([regression, classification]);
    value_b["solutions"] = json!([
        {"index": 0, "name": "Baseline", "path": "baseline.zip", "tasks": [10, 20]}
    ]);
    value_b["phases"] = json!([
        phase(7, "Final", &[20]),
        phase(3, "Development", &[10, 20])
    ]);

    let files_b = sample_files().with_file("programs/score_v2.zip", common::SCORING.to_vec());
    let a = normalized(value_a);
    let b = normalize_bundle(&bundle(value_b), &files_b).unwrap();

    let comparison = compare_bundles(&a, &b).unwrap();

    assert!(comparison.is_identical(), "{:?}", comparison.differences);
}

#[test]
fn test_changed_image_reported_as_file_mismatch() {
    let a = normalized(sample_bundle_value("Comp"));
    let files_b = MemoryBundleFiles::new()
        .with_file("logo.png", b"a different logo".to_vec())
        .with_file("overview.md", b"# Overview".to_vec())
        .with_file("scoring.zip", common::SCORING.to_vec())
        .with_file("baseline.zip", b"baseline".to_vec());
    let b = normalize_bundle(&bundle(sample_bundle_value("Comp")), &files_b).unwrap();

    let comparison = compare_bundles(&a, &b).unwrap();

    assert_eq!(comparison.differences.len(), 1);
    assert!(matches!(
        &comparison.differences[0],
        Difference::FileMismatch { field, .. } if field == "image"
    ));
}

#[test]
fn test_unmatched_tasks_reported_on_both_sides() {
    let mut value_a = sample_bundle_value("Comp");
    value_a["tasks"] = json!([task(0, "Classification"), task(1, "Regression")]);
    value_a["phases"] = json!([phase(0, "Development", &[0])]);
    let mut value_b = sample_bundle_value("Comp");
    value_b["tasks"] = json!([task(0, "Classification"), task(1, "Regression")]);
    value_b["phases"] = json!([phase(0, "Development", &[0, 1])]);

    let comparison = compare_bundles(&normalized(value_a), &normalized(value_b)).unwrap();

    assert_eq!(
        comparison.differences,
        vec![Difference::NoEquivalentValue {
            side: BundleSide::B,
            label: EntityLabel::Task,
            index: 1,
        }]
    );
}

#[test]
fn test_unmatched_solutions_are_not_reported() {
    let mut value_a = sample_bundle_value("Comp");
    value_a["solutions"] = json!([
        {"index": 0, "name": "Baseline", "path": "baseline.zip", "tasks": [0]},
        {"index": 1, "name": "Extra", "path": "baseline.zip", "tasks": [1]}
    ]);
    value_a["phases"][0]["solutions"] = json!([0, 1]);
    let mut value_b = sample_bundle_value("Comp");
    value_b["solutions"] = json!([
        {"index": 0, "name": "Baseline", "path": "baseline.zip", "tasks": [0]}
    ]);
    value_b["phases"][0]["solutions"] = json!([0]);

    let comparison = compare_bundles(&normalized(value_a), &normalized(value_b)).unwrap();

    assert!(comparison.is_identical(), "{:?}", comparison.differences);
}

#[test]
fn test_mismatched_fields_are_symmetric() {
    let mut value_a = sample_bundle_value("Comp");
    value_a["phases"][0]["max_submissions"] = json!(5);
    value_a["phases"][0]["description"] = json!("Tune your model");
    let mut value_b = sample_bundle_value("Comp");
    value_b["phases"][0]["max_submissions"] = json!(10);
    value_b["phases"][0]["description"] = json!("Tune the model");

    let a = normalized(value_a);
    let b = normalized(value_b);
    let forward = diff_phase(&a.phases[0], &b.phases[0]).unwrap();
    let backward = diff_phase(&b.phases[0], &a.phases[0]).unwrap();

    let mismatches = |diffs: &[Difference]| -> Vec<(String, Value, Value)> {
        diffs
            .iter()
            .filter_map(|d| match d {
                Difference::MismatchedValues {
                    field,
                    value_a,
                    value_b,
                    ..
                } => Some((field.clone(), value_a.clone(), value_b.clone())),
                _ => None,
            })
            .collect()
    };
    let forward = mismatches(&forward);
    let swapped: Vec<_> = mismatches(&backward)
        .into_iter()
        .map(|(field, a, b)| (field, b, a))
        .collect();

    assert_eq!(forward.len(), 2);
    assert_eq!(forward, swapped);
}

#[test]
fn test_summary_renders_with_side_names() {
    let a = normalized(sample_bundle_value("Comp A"));
    let b = normalized(sample_bundle_value("Comp B"));
    let comparison = compare_bundles(&a, &b).unwrap();

    let text = render_human_summary(&comparison, &SideNames::new("a.zip", "b"));

    assert!(text.contains("  - [a.zip] Title = Comp A\n"));
    assert!(text.contains("  - [b] Title = Comp B"));
}
