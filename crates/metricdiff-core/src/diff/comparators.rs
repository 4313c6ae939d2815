//! Field comparators.
//!
//! Each comparator looks at one attribute of a matched (old, new) pair and
//! yields at most one human-readable description. Empty values are ordinary
//! values here, never errors.

use crate::model::MetricRecord;
use std::collections::BTreeSet;

/// Separator between the parts of a compound description.
pub const LINE_BREAK: &str = " <br> ";

type Comparator = fn(&MetricRecord, &MetricRecord) -> Option<String>;

/// Comparators in reporting order.
const COMPARATORS: &[Comparator] = &[
    help_change,
    type_change,
    stability_change,
    deprecation_change,
    age_buckets_change,
    buf_cap_change,
    max_age_change,
    const_labels_change,
    labels_change,
    buckets_change,
];

/// Run every field comparator against a matched pair.
///
/// An empty result means the pair is unchanged.
pub fn field_changes(old: &MetricRecord, new: &MetricRecord) -> Vec<String> {
    COMPARATORS
        .iter()
        .filter_map(|compare| compare(old, new))
        .collect()
}

fn help_change(old: &MetricRecord, new: &MetricRecord) -> Option<String> {
    (old.help != new.help).then(|| "Help text changed.".to_string())
}

fn type_change(old: &MetricRecord, new: &MetricRecord) -> Option<String> {
    (old.metric_type != new.metric_type).then(|| {
        format!(
            "Type changed from `{}` to `{}`.",
            old.metric_type, new.metric_type
        )
    })
}

fn stability_change(old: &MetricRecord, new: &MetricRecord) -> Option<String> {
    (old.stability_level != new.stability_level).then(|| {
        format!(
            "Stability level changed from `{}` to `{}`.",
            old.stability_level, new.stability_level
        )
    })
}

fn deprecation_change(old: &MetricRecord, new: &MetricRecord) -> Option<String> {
    let (old_version, new_version) = (&old.deprecated_version, &new.deprecated_version);
    if old_version == new_version {
        return None;
    }
    let description = if old_version.is_empty() {
        format!("Marked as deprecated in version `{}`.", new_version)
    } else if new_version.is_empty() {
        "No longer marked as deprecated.".to_string()
    } else {
        format!(
            "Deprecated version changed from `{}` to `{}`.",
            old_version, new_version
        )
    };
    Some(description)
}

fn age_buckets_change(old: &MetricRecord, new: &MetricRecord) -> Option<String> {
    numeric_change("AgeBuckets", old.age_buckets, new.age_buckets)
}

fn buf_cap_change(old: &MetricRecord, new: &MetricRecord) -> Option<String> {
    numeric_change("BufCap", old.buf_cap, new.buf_cap)
}

fn max_age_change(old: &MetricRecord, new: &MetricRecord) -> Option<String> {
    numeric_change("MaxAge", old.max_age, new.max_age)
}

fn numeric_change<T>(field: &str, old: T, new: T) -> Option<String>
where
    T: PartialEq + std::fmt::Display,
{
    (old != new).then(|| format!("{} changed from `{}` to `{}`.", field, old, new))
}

fn const_labels_change(old: &MetricRecord, new: &MetricRecord) -> Option<String> {
    (old.const_labels != new.const_labels).then(|| "ConstLabels changed.".to_string())
}

fn labels_change(old: &MetricRecord, new: &MetricRecord) -> Option<String> {
    (old.labels != new.labels).then(|| label_set_diff(&old.labels, &new.labels))
}

// Element-wise and order-sensitive; exact float equality.
fn buckets_change(old: &MetricRecord, new: &MetricRecord) -> Option<String> {
    (old.buckets != new.buckets).then(|| "Buckets changed.".to_string())
}

/// Describe how two label lists differ.
///
/// Labels gained or lost are listed (sorted, backtick-quoted). When both
/// lists hold the same set and only their order differs, the description
/// names the old and new orderings instead.
pub fn label_set_diff(old: &[String], new: &[String]) -> String {
    let old_set: BTreeSet<&str> = old.iter().map(String::as_str).collect();
    let new_set: BTreeSet<&str> = new.iter().map(String::as_str).collect();

    let added: Vec<String> = new_set
        .difference(&old_set)
        .map(|label| format!("`{}`", label))
        .collect();
    let removed: Vec<String> = old_set
        .difference(&new_set)
        .map(|label| format!("`{}`", label))
        .collect();

    let mut parts = Vec::with_capacity(2);
    if !added.is_empty() {
        parts.push(format!("Added labels: [{}].", added.join(", ")));
    }
    if !removed.is_empty() {
        parts.push(format!("Removed labels: [{}].", removed.join(", ")));
    }

    if parts.is_empty() {
        return format!(
            "Labels reordered: [{}] → [{}]",
            old.join(", "),
            new.join(", ")
        );
    }
    parts.join(LINE_BREAK)
}
