//! JSON rendering of the ordered diff list.

use crate::diff::model::MetricDiff;
use crate::errors::Result;

/// Serialize the diff list as pretty-printed JSON.
///
/// # Errors
///
/// - `Serialization` — a record could not be represented as JSON
pub fn render_json(diffs: &[MetricDiff<'_>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(diffs)?)
}
