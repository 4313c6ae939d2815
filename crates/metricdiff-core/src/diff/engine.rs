//! Snapshot comparison engine.
//!
//! The core entry point is [`compare_snapshots`], which classifies every
//! identity key across two snapshots and returns the key-ordered diff list.

use crate::diff::comparators::field_changes;
use crate::diff::model::MetricDiff;
use crate::snapshot::Snapshot;

/// Compare two snapshots.
///
/// Keys only in `new` are Added, keys only in `old` are Removed, and keys in
/// both are Updated when at least one field comparator reports a change.
/// Unchanged pairs are omitted. The result is ordered by identity key.
pub fn compare_snapshots<'a>(old: &'a Snapshot, new: &'a Snapshot) -> Vec<MetricDiff<'a>> {
    let mut diffs = Vec::new();

    for (key, new_record) in new.iter() {
        match old.get(key) {
            Some(old_record) => {
                let changes = field_changes(old_record, new_record);
                if !changes.is_empty() {
                    diffs.push(MetricDiff::updated(
                        key.to_string(),
                        old_record,
                        new_record,
                        changes,
                    ));
                }
            }
            None => diffs.push(MetricDiff::added(key.to_string(), new_record)),
        }
    }

    for (key, old_record) in old.iter() {
        if !new.contains_key(key) {
            diffs.push(MetricDiff::removed(key.to_string(), old_record));
        }
    }

    tracing::debug!(
        old_len = old.len(),
        new_len = new.len(),
        diff_count = diffs.len(),
        "compared snapshots"
    );

    sort_diffs(diffs)
}

/// Order diffs by identity key ascending.
///
/// Stable; keys are unique across one comparison so ties do not occur.
pub fn sort_diffs(mut diffs: Vec<MetricDiff<'_>>) -> Vec<MetricDiff<'_>> {
    diffs.sort_by(|a, b| a.key.cmp(&b.key));
    diffs
}
