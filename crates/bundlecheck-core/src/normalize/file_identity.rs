//! File identity resolution
//!
//! Replaces authored file paths with content fingerprints.

use crate::errors::{BundleCheckError, Result};
use crate::files::{is_uuid_placeholder, BundleFiles, FileProbe};
use crate::model::{FileRef, Page, Solution, Task};

/// Resolve one file reference.
///
/// - regular file → `Fingerprint`
/// - directory → `ManualReview`
/// - missing UUID placeholder → `External` (opaque, compared by string)
/// - already resolved → unchanged
///
/// # Errors
///
/// `FileMissing` for a missing non-UUID path; any read error from `files`.
pub fn resolve_file_ref(file: &FileRef, files: &dyn BundleFiles) -> Result<FileRef> {
    let Some(path) = file.unresolved_path() else {
        return Ok(file.clone());
    };

    match files.probe(path) {
        FileProbe::File => files.fingerprint(path).map(FileRef::Fingerprint),
        FileProbe::Directory => Ok(FileRef::ManualReview),
        FileProbe::Missing if is_uuid_placeholder(path) => Ok(FileRef::External(path.to_string())),
        FileProbe::Missing => Err(BundleCheckError::FileNotFound {
            path: path.to_string(),
        }
        .into()),
    }
}

/// Fingerprint every file field of a task in place.
///
/// # Errors
///
/// See [`resolve_file_ref`].
pub fn fingerprint_task(task: &mut Task, files: &dyn BundleFiles) -> Result<()> {
    for (_, file) in task.file_refs_mut() {
        *file = resolve_file_ref(file, files)?;
    }
    Ok(())
}

/// Fingerprint a solution's `path` in place.
///
/// # Errors
///
/// See [`resolve_file_ref`].
pub fn fingerprint_solution(solution: &mut Solution, files: &dyn BundleFiles) -> Result<()> {
    solution.path = resolve_file_ref(&solution.path, files)?;
    Ok(())
}

/// Fingerprint a page's `file` in place.
///
/// # Errors
///
/// See [`resolve_file_ref`].
pub fn fingerprint_page(page: &mut Page, files: &dyn BundleFiles) -> Result<()> {
    page.file = resolve_file_ref(&page.file, files)?;
    Ok(())
}
