pub mod bundle;
pub mod file_ref;
pub mod leaderboard;
pub mod phase;
pub mod record;
pub mod solution;
pub mod task;

pub use bundle::{Bundle, Page};
pub use file_ref::{FileRef, MANUAL_REVIEW_SENTINEL};
pub use leaderboard::{Column, Leaderboard};
pub use phase::{Phase, SolutionRef, TaskRef};
pub use record::{EntityLabel, FieldMap, Record};
pub use solution::Solution;
pub use task::{Task, TASK_FILE_FIELDS};
