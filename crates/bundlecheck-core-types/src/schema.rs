//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_BUNDLE: &str = "bundle";

// Collection sizes
pub const FIELD_ERROR_COUNT: &str = "error_count";
pub const FIELD_WARNING_COUNT: &str = "warning_count";
pub const FIELD_DIFF_COUNT: &str = "diff_count";
pub const FIELD_MATCHED: &str = "matched";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
