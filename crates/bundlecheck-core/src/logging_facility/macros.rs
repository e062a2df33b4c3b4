//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use bundlecheck_core::log_op_start;
/// log_op_start!("validate_bundle");
/// log_op_start!("validate_bundle", bundle = "comp_a");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = bundlecheck_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = bundlecheck_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use bundlecheck_core::log_op_end;
/// log_op_end!("validate_bundle", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = bundlecheck_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = bundlecheck_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into [`BcError`](crate::errors::BcError).
///
/// # Example
///
/// ```
/// # use bundlecheck_core::log_op_error;
/// # use bundlecheck_core::errors::{BcError, BcErrorKind};
/// let err = BcError::new(BcErrorKind::ManifestNotFound);
/// log_op_error!("validate_bundle", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::BcError;
        let bc_err: BcError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = bundlecheck_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?bc_err.kind(),
            err_code = bc_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::BcError;
        let bc_err: BcError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = bundlecheck_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?bc_err.kind(),
            err_code = bc_err.code(),
            $($field)*
        );
    }};
}
