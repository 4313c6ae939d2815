//! Canonical logging macros
//!
//! Callers must depend on `metricdiff-core-types` for the event names and on
//! `tracing` for the event itself.

/// Emit one lifecycle event with the canonical `component`/`op`/`event` fields.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:expr, $event:expr, $op:expr $(, $($field:tt)*)?) => {
        tracing::event!(
            $level,
            component = module_path!(),
            op = $op,
            event = $event,
            $($($field)*)?
        )
    };
}

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use metricdiff_core::log_op_start;
/// log_op_start!("load_catalog");
/// log_op_start!("load_catalog", path = "v1.30.yaml");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            tracing::Level::INFO,
            metricdiff_core_types::schema::EVENT_START,
            $op
            $(, $($field)*)?
        )
    };
}

/// Log the successful end of an operation
///
/// `duration_ms` is mandatory so every `end` can be paired with its `start`.
///
/// ```
/// # use metricdiff_core::log_op_end;
/// log_op_end!("compare_snapshots", duration_ms = 3, diff_count = 12);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            tracing::Level::INFO,
            metricdiff_core_types::schema::EVENT_END,
            $op,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// Log an operation failure
///
/// Accepts anything convertible into `ExError`. Besides `err_kind` and
/// `err_code`, the event carries the error's `metric_key`, `path` and
/// `err_message` whenever they are set, so callers only add fields the
/// error does not already know.
///
/// ```
/// # use metricdiff_core::{log_op_error, errors::MetricDiffError};
/// let err = MetricDiffError::CatalogDecode {
///     path: "v1.30.yaml".to_string(),
///     reason: "expected a sequence".to_string(),
/// };
/// log_op_error!("load_catalog", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__log_op_event!(
            tracing::Level::ERROR,
            metricdiff_core_types::schema::EVENT_END_ERROR,
            $op,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            metric_key = ex_err.metric_key(),
            path = ex_err.path(),
            err_message = Some(ex_err.message()).filter(|m| !m.is_empty())
            $(, $($field)*)?
        );
    }};
}
