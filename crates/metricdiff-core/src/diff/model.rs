//! Diff output types.

use crate::model::MetricRecord;
use serde::Serialize;
use std::fmt;

/// Three-way outcome of comparing one identity key across two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChangeType {
    /// Present only in the new snapshot
    Added,
    /// Present only in the old snapshot
    Removed,
    /// Present in both with at least one field-level change
    Updated,
}

impl ChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Added => "Added",
            ChangeType::Removed => "Removed",
            ChangeType::Updated => "Updated",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The comparison result for one identity key.
///
/// Records are borrowed from the snapshots being compared.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricDiff<'a> {
    /// Identity key shared by both sides
    pub key: String,
    pub change_type: ChangeType,
    /// Present for Removed and Updated
    pub old: Option<&'a MetricRecord>,
    /// Present for Added and Updated
    pub new: Option<&'a MetricRecord>,
    /// Human-readable change descriptions; non-empty only for Updated
    pub changes: Vec<String>,
}

impl<'a> MetricDiff<'a> {
    pub fn added(key: String, new: &'a MetricRecord) -> Self {
        Self {
            key,
            change_type: ChangeType::Added,
            old: None,
            new: Some(new),
            changes: Vec::new(),
        }
    }

    pub fn removed(key: String, old: &'a MetricRecord) -> Self {
        Self {
            key,
            change_type: ChangeType::Removed,
            old: Some(old),
            new: None,
            changes: Vec::new(),
        }
    }

    pub fn updated(
        key: String,
        old: &'a MetricRecord,
        new: &'a MetricRecord,
        changes: Vec<String>,
    ) -> Self {
        Self {
            key,
            change_type: ChangeType::Updated,
            old: Some(old),
            new: Some(new),
            changes,
        }
    }

    /// The record describing the metric "as it is now": the new side when
    /// present, otherwise the old side.
    pub fn current(&self) -> Option<&'a MetricRecord> {
        self.new.or(self.old)
    }
}

/// Per-classification counts over a diff list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub updated: usize,
    pub total: usize,
}

impl DiffSummary {
    pub fn from_diffs(diffs: &[MetricDiff<'_>]) -> Self {
        diffs.iter().fold(Self::default(), |mut acc, diff| {
            match diff.change_type {
                ChangeType::Added => acc.added += 1,
                ChangeType::Removed => acc.removed += 1,
                ChangeType::Updated => acc.updated += 1,
            }
            acc.total += 1;
            acc
        })
    }
}
