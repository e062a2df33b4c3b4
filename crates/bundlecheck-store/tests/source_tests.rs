#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use bundlecheck_core::errors::BcErrorKind;
use bundlecheck_core::files::{fingerprint_bytes, BundleFiles, FileProbe};
use bundlecheck_store::{BundleSource, FsBundleFiles, DEFAULT_MANIFEST_NAME};
use common::{build_zip, example_bundle_dir, write_example_zip};
use tempfile::TempDir;

#[test]
fn test_directory_source_uses_directory_in_place() {
    let dir = example_bundle_dir();

    let source = BundleSource::open(dir.path()).unwrap();

    assert_eq!(source.root(), dir.path());
    assert!(!source.is_archive());
    assert!(source.manifest_path(DEFAULT_MANIFEST_NAME).is_ok());
}

#[test]
fn test_zip_source_is_extracted() {
    let dir = TempDir::new().unwrap();
    let zip_path = write_example_zip(dir.path(), "comp_a.zip");

    let source = BundleSource::open(&zip_path).unwrap();

    assert!(source.is_archive());
    assert_eq!(source.display_name(), "comp_a.zip");
    assert!(source.root().join("pages/overview.md").is_file());
    assert!(source.manifest_path(DEFAULT_MANIFEST_NAME).is_ok());
}

#[test]
fn test_extraction_directory_removed_on_drop() {
    let dir = TempDir::new().unwrap();
    let zip_path = write_example_zip(dir.path(), "comp.zip");

    let source = BundleSource::open(&zip_path).unwrap();
    let root = source.root().to_path_buf();
    drop(source);

    assert!(!root.exists());
}

#[test]
fn test_traversal_entries_are_skipped() {
    let dir = TempDir::new().unwrap();
    let zip_path = dir.path().join("evil.zip");
    let entries: Vec<(&str, &[u8])> = vec![
        ("competition.yaml", b"title: x"),
        ("../escaped.txt", b"nope"),
    ];
    std::fs::write(&zip_path, build_zip(&entries)).unwrap();

    let source = BundleSource::open(&zip_path).unwrap();

    assert!(source.root().join("competition.yaml").is_file());
    assert!(!source.root().parent().unwrap().join("escaped.txt").exists());
}

#[test]
fn test_non_zip_file_is_invalid_archive() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bundle.zip");
    std::fs::write(&path, b"this is not a zip file").unwrap();

    let err = BundleSource::open(&path).unwrap_err();

    assert_eq!(err.kind(), BcErrorKind::InvalidArchive);
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = BundleSource::open(&dir.path().join("nowhere")).unwrap_err();
    assert_eq!(err.kind(), BcErrorKind::Io);
}

#[test]
fn test_missing_manifest() {
    let dir = TempDir::new().unwrap();
    let source = BundleSource::open(dir.path()).unwrap();
    let err = source.manifest_path(DEFAULT_MANIFEST_NAME).unwrap_err();
    assert_eq!(err.kind(), BcErrorKind::ManifestNotFound);
}

#[test]
fn test_fs_files_probe_and_fingerprint() {
    let dir = example_bundle_dir();
    let files = FsBundleFiles::new(dir.path());

    assert_eq!(files.probe("logo.png"), FileProbe::File);
    assert_eq!(files.probe("scoring_program"), FileProbe::Directory);
    assert_eq!(files.probe("absent.zip"), FileProbe::Missing);
    assert_eq!(
        files.fingerprint("baseline.zip").unwrap(),
        fingerprint_bytes(b"baseline bytes")
    );
    assert_eq!(
        files.fingerprint("absent.zip").unwrap_err().kind(),
        BcErrorKind::FileMissing
    );
}
