use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

pub const MANIFEST: &str = r#"
title: Example Competition
image: logo.png
pages:
  - title: Overview
    file: pages/overview.md
tasks:
  - index: 0
    name: Classification
    description: Classify the images
    scoring_program: scoring_program
    reference_data: reference.zip
  - index: 1
    key: 7a1c9d0e-3b2f-4c5d-8e9f-0a1b2c3d4e5f
solutions:
  - index: 0
    name: Baseline
    path: baseline.zip
    tasks: [0]
phases:
  - index: 0
    name: Development
    start: 2024-01-01
    end: 2024-03-01 12:00
    max_submissions: 100
    tasks: [0, 1]
    solutions: [0]
leaderboards:
  - index: 0
    title: Results
    key: main
    columns:
      - index: 0
        title: Accuracy
        key: accuracy
        sorting: desc
"#;

/// Files referenced by [`MANIFEST`], relative to the bundle root
#[allow(dead_code)]
pub const FILES: &[(&str, &[u8])] = &[
    ("logo.png", b"png bytes"),
    ("pages/overview.md", b"# Overview"),
    ("scoring_program/metadata.yaml", b"command: python score.py"),
    ("reference.zip", b"reference bytes"),
    ("baseline.zip", b"baseline bytes"),
];

/// Write a bundle directory with the given manifest and files
#[allow(dead_code)]
pub fn write_bundle_dir(root: &Path, manifest: &str, files: &[(&str, &[u8])]) {
    fs::write(root.join("competition.yaml"), manifest).unwrap();
    for (rel, content) in files {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

/// A temporary directory holding the example bundle
#[allow(dead_code)]
pub fn example_bundle_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_bundle_dir(dir.path(), MANIFEST, FILES);
    dir
}

/// Build a zip archive in memory with the given entries
#[allow(dead_code)]
pub fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let cursor = std::io::Cursor::new(Vec::new());
    let mut writer = zip::ZipWriter::new(cursor);
    let options =
        zip::write::SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (name, content) in entries {
        writer.start_file(*name, options).expect("zip start_file");
        writer.write_all(content).expect("zip write_all");
    }
    writer.finish().expect("zip finish").into_inner()
}

/// Write the example bundle as `<dir>/<name>` zip archive
#[allow(dead_code)]
pub fn write_example_zip(dir: &Path, name: &str) -> std::path::PathBuf {
    let mut entries: Vec<(&str, &[u8])> = vec![("competition.yaml", MANIFEST.as_bytes())];
    entries.extend_from_slice(FILES);
    let path = dir.join(name);
    fs::write(&path, build_zip(&entries)).unwrap();
    path
}
