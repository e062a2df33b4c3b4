//! Bundle normalization
//!
//! Turns a validated bundle into the canonical form compared by
//! [`crate::diff`]: file paths become content fingerprints, tasks and phases
//! are densely re-indexed, phase references embed the records they cite and
//! phase dates are canonical instants.

pub mod dates;
pub mod file_identity;
pub mod references;

use crate::errors::{BundleCheckError, Result};
use crate::files::BundleFiles;
use crate::model::{Bundle, Phase};

pub use dates::{canonical_date, parse_instant};
pub use file_identity::resolve_file_ref;

/// Produce the canonical form of a bundle that passed validation.
///
/// The input is left untouched. Normalizing an already-normalized bundle
/// returns it unchanged.
///
/// # Errors
///
/// - `FileMissing` / `Io` if a referenced file cannot be fingerprinted
/// - `DanglingReference` if a phase cites an unknown task or solution
/// - `InvalidDate` if a phase date does not parse
pub fn normalize_bundle(bundle: &Bundle, files: &dyn BundleFiles) -> Result<Bundle> {
    let mut canonical = bundle.clone();

    canonical.image = resolve_file_ref(&canonical.image, files)?;

    for task in &mut canonical.tasks {
        file_identity::fingerprint_task(task, files)?;
    }
    references::reindex_tasks(&mut canonical.tasks);
    let task_lookup = references::by_original_index(&canonical.tasks);

    // Solutions keep their authored order and index; phases embed them by index
    if let Some(solutions) = &mut canonical.solutions {
        for solution in solutions.iter_mut() {
            file_identity::fingerprint_solution(solution, files)?;
        }
    }
    let solution_lookup = references::by_original_index(canonical.solutions());

    for phase in &mut canonical.phases {
        references::embed_references(phase, &task_lookup, &solution_lookup)?;
        canonicalize_dates(phase)?;
    }
    references::reindex_phases(&mut canonical.phases);

    for page in &mut canonical.pages {
        file_identity::fingerprint_page(page, files)?;
    }

    tracing::debug!(
        tasks = canonical.tasks.len(),
        solutions = canonical.solutions().len(),
        phases = canonical.phases.len(),
        pages = canonical.pages.len(),
        "bundle normalized"
    );

    Ok(canonical)
}

fn canonicalize_dates(phase: &mut Phase) -> Result<()> {
    let name = phase.name.clone();
    for (field, slot) in [("start", &mut phase.start), ("end", &mut phase.end)] {
        if let Some(value) = slot {
            let canonical =
                canonical_date(value).ok_or_else(|| BundleCheckError::InvalidPhaseDate {
                    phase: name.clone(),
                    field: field.to_string(),
                    value: value.clone(),
                })?;
            *value = canonical;
        }
    }
    Ok(())
}
