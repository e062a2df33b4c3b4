use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const MANIFEST: &str = r#"
title: Example Competition
image: logo.png
tasks:
  - index: 0
    name: Classification
    description: Classify the images
    scoring_program: scoring.zip
  - index: 1
    name: Regression
    description: Predict the value
    scoring_program: scoring.zip
solutions:
  - index: 0
    name: Baseline
    path: baseline.zip
    tasks: [0, 1]
phases:
  - index: 0
    name: Development
    start: 2024-01-01
    max_submissions: 100
    tasks: [0, 1]
    solutions: [0]
  - index: 1
    name: Final
    start: 2024-03-01
    tasks: [1]
leaderboards:
  - index: 0
    title: Results
    key: main
    columns:
      - index: 0
        title: Accuracy
        key: accuracy
"#;

pub const FILES: &[(&str, &[u8])] = &[
    ("logo.png", b"png bytes"),
    ("scoring.zip", b"scoring bytes"),
    ("baseline.zip", b"baseline bytes"),
];

/// Write `<parent>/<name>/` holding `manifest` and `files`
pub fn write_bundle(parent: &Path, name: &str, manifest: &str, files: &[(&str, &[u8])]) -> PathBuf {
    let root = parent.join(name);
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("competition.yaml"), manifest).unwrap();
    for (rel, content) in files {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    root
}

/// Write `<parent>/<name>` as a zip archive of the manifest and files
#[allow(dead_code)]
pub fn write_bundle_zip(parent: &Path, name: &str, manifest: &str, files: &[(&str, &[u8])]) -> PathBuf {
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options =
        zip::write::SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    writer.start_file("competition.yaml", options).unwrap();
    writer.write_all(manifest.as_bytes()).unwrap();
    for (rel, content) in files {
        writer.start_file(*rel, options).unwrap();
        writer.write_all(content).unwrap();
    }
    let bytes = writer.finish().unwrap().into_inner();
    let path = parent.join(name);
    fs::write(&path, bytes).unwrap();
    path
}
