//! Zip bundle extraction

use crate::errors::{invalid_archive, io_error, Result};
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Extract a zip archive into `dest`, returning the number of files written.
///
/// Entries whose names would escape `dest` (absolute paths, `..`) are
/// skipped. Directory entries are created so that directory references in
/// the manifest still resolve.
///
/// # Errors
///
/// `InvalidArchive` if the file is not a readable zip; `Io` if writing fails.
pub fn extract_zip(archive_path: &Path, dest: &Path) -> Result<usize> {
    let file = File::open(archive_path).map_err(|e| io_error("open_archive", archive_path, e))?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| invalid_archive(archive_path, &format!("Invalid ZIP archive: {e}")))?;

    let mut written = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| invalid_archive(archive_path, &format!("ZIP read error: {e}")))?;

        // Reject entries with path traversal components
        let Some(relative) = entry.enclosed_name() else {
            tracing::debug!(entry = entry.name(), "skipping unsafe zip entry");
            continue;
        };
        let target = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&target).map_err(|e| io_error("extract_archive", &target, e))?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| io_error("extract_archive", parent, e))?;
        }
        let mut out = File::create(&target).map_err(|e| io_error("extract_archive", &target, e))?;
        io::copy(&mut entry, &mut out).map_err(|e| io_error("extract_archive", &target, e))?;
        written += 1;
    }

    tracing::debug!(archive = %archive_path.display(), files = written, "archive extracted");
    Ok(written)
}
