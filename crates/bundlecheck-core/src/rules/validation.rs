//! Structural and referential validation of a single bundle
//!
//! Every check runs and accumulates into one [`ValidationReport`]; nothing
//! short-circuits, so a single run surfaces every problem at once.

use super::index_registry::{IndexRegistry, IndexScope};
use crate::files::{is_uuid_placeholder, BundleFiles, FileProbe};
use crate::model::{Bundle, FileRef, SolutionRef, TaskRef};
use serde::Serialize;
use std::collections::BTreeSet;

/// Fields a task must supply unless it uses the `key` shortcut.
const TASK_REQUIRED_FIELDS: [&str; 3] = ["name", "description", "scoring_program"];

/// Outcome of validating one bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// State for one validation run.
struct ValidationContext<'a> {
    bundle: &'a Bundle,
    files: &'a dyn BundleFiles,
    registry: IndexRegistry,
    report: ValidationReport,
}

/// Validate a bundle as authored (before normalization).
///
/// Does not mutate the bundle. Validating the same bundle twice against the
/// same files yields identical reports.
pub fn validate_bundle(bundle: &Bundle, files: &dyn BundleFiles) -> ValidationReport {
    let mut ctx = ValidationContext {
        bundle,
        files,
        registry: IndexRegistry::new(),
        report: ValidationReport::default(),
    };

    ctx.check_duplicate_indexes();
    ctx.check_column_indexes();
    ctx.check_tasks();
    ctx.check_solution_tasks();
    ctx.check_phase_tasks();
    ctx.check_phase_solutions();
    ctx.check_leaderboard_keys();
    ctx.check_files();

    tracing::debug!(
        errors = ctx.report.errors.len(),
        warnings = ctx.report.warnings.len(),
        "bundle validated"
    );

    ctx.report
}

impl ValidationContext<'_> {
    fn error(&mut self, message: String) {
        self.report.errors.push(message);
    }

    fn check_duplicate_indexes(&mut self) {
        let bundle = self.bundle;
        for task in &bundle.tasks {
            self.registry.register(IndexScope::Task, task.index);
        }
        for solution in bundle.solutions() {
            self.registry.register(IndexScope::Solution, solution.index);
        }
        for phase in &bundle.phases {
            self.registry.register(IndexScope::Phase, phase.index);
        }
        for leaderboard in &bundle.leaderboards {
            self.registry.register(IndexScope::Leaderboard, leaderboard.index);
        }

        for scope in [
            IndexScope::Task,
            IndexScope::Solution,
            IndexScope::Phase,
            IndexScope::Leaderboard,
        ] {
            let duplicates = self.registry.duplicates(scope);
            if !duplicates.is_empty() {
                let message = format!(
                    "Duplicate {} index(es): {}",
                    scope.noun(),
                    format_list(duplicates)
                );
                self.error(message);
            }
        }
    }

    fn check_column_indexes(&mut self) {
        let bundle = self.bundle;
        for (pos, leaderboard) in bundle.leaderboards.iter().enumerate() {
            for column in &leaderboard.columns {
                if !self.registry.register(IndexScope::Column(pos), column.index) {
                    self.error(format!(
                        "Duplicate column index: {} on leaderboard: {}",
                        column.index, leaderboard.title
                    ));
                }
            }
        }
    }

    fn check_tasks(&mut self) {
        let bundle = self.bundle;
        for task in &bundle.tasks {
            if task.is_key_reference() {
                if task.has_fields_beside_key() {
                    self.report.warnings.push(format!(
                        "Task with index {}: If specifying a key, all other fields will be ignored on upload",
                        task.index
                    ));
                }
                continue;
            }

            let present = [
                task.name.is_some(),
                task.description.is_some(),
                task.scoring_program.is_some(),
            ];
            for (field, present) in TASK_REQUIRED_FIELDS.iter().zip(present) {
                if !present {
                    self.error(format!(
                        "Task with index {}: missing required field - {}",
                        task.index, field
                    ));
                }
            }
        }
    }

    fn check_solution_tasks(&mut self) {
        let bundle = self.bundle;
        for solution in bundle.solutions() {
            let cited = solution.tasks.iter().copied();
            for index in self.dangling(IndexScope::Task, cited) {
                self.error(format!(
                    "Task index: \"{}\" on solution: \"{}\" not present in tasks",
                    index,
                    solution.display_name()
                ));
            }
        }
    }

    fn check_phase_tasks(&mut self) {
        let bundle = self.bundle;
        for phase in &bundle.phases {
            let cited = phase.tasks.iter().map(TaskRef::original_index);
            for index in self.dangling(IndexScope::Task, cited) {
                self.error(format!(
                    "Task index: \"{}\" on phase: \"{}\" not present in tasks",
                    index, phase.name
                ));
            }
        }
    }

    fn check_phase_solutions(&mut self) {
        let bundle = self.bundle;
        for phase in &bundle.phases {
            let Some(solutions) = &phase.solutions else {
                continue;
            };
            let cited = solutions.iter().map(SolutionRef::original_index);
            for index in self.dangling(IndexScope::Solution, cited) {
                self.error(format!(
                    "Solution index: \"{}\" on phase: \"{}\" not present in solutions",
                    index, phase.name
                ));
            }
        }
    }

    /// Cited indexes missing from `scope`, ascending and deduplicated
    fn dangling(&self, scope: IndexScope, cited: impl Iterator<Item = i64>) -> BTreeSet<i64> {
        cited
            .filter(|index| !self.registry.contains(scope, *index))
            .collect()
    }

    fn check_leaderboard_keys(&mut self) {
        let bundle = self.bundle;
        let mut leaderboard_keys = BTreeSet::new();
        let mut duplicate_keys = Vec::new();
        let mut column_errors = Vec::new();

        for leaderboard in &bundle.leaderboards {
            if !leaderboard_keys.insert(leaderboard.key.as_str()) {
                duplicate_keys.push(leaderboard.key.as_str());
            }

            let mut column_keys = BTreeSet::new();
            for column in &leaderboard.columns {
                if !column_keys.insert(column.key.as_str()) {
                    column_errors.push(format!(
                        "Duplicate column key: {} on leaderboard: {}",
                        column.key, leaderboard.title
                    ));
                }
            }
        }

        if !duplicate_keys.is_empty() {
            self.error(format!("Duplicate leaderboard keys: {:?}", duplicate_keys));
        }
        self.report.errors.extend(column_errors);
    }

    fn check_files(&mut self) {
        let bundle = self.bundle;

        if let Some(path) = self.missing(&bundle.image) {
            self.error(format!("Image file - ({}) - not found", path));
        }

        for page in &bundle.pages {
            if let Some(path) = self.missing(&page.file) {
                self.error(format!(
                    "File for page \"{}\" - ({}) - not found",
                    page.title, path
                ));
            }
        }

        for task in &bundle.tasks {
            for (field, file) in task.file_refs() {
                if let Some(path) = self.missing(file) {
                    self.error(format!("File for {} - ({}) - not found", field, path));
                }
            }
        }

        for solution in bundle.solutions() {
            if let Some(path) = self.missing(&solution.path) {
                self.error(format!(
                    "File for \"{}\" - ({}) - not found",
                    solution.display_name(),
                    path
                ));
            }
        }
    }

    /// The authored path if it is absent and not a UUID placeholder
    fn missing<'f>(&self, file: &'f FileRef) -> Option<&'f str> {
        let path = file.unresolved_path()?;
        if self.files.probe(path) == FileProbe::Missing && !is_uuid_placeholder(path) {
            Some(path)
        } else {
            None
        }
    }
}

fn format_list(values: &[i64]) -> String {
    let items: Vec<String> = values.iter().map(i64::to_string).collect();
    format!("[{}]", items.join(", "))
}
