//! Command orchestration layer.
//!
//! Each public command logs exactly one start event and one end (or error)
//! event. The core and store layers below only emit debug events.

pub mod compare;
pub mod engine_command;
pub mod options;
pub mod validate;
