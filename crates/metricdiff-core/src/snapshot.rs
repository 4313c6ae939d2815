//! Snapshot indexer
//!
//! Builds a keyed, read-only view of one catalog version. The mapping is
//! assembled by a single fold over the decoded records and never mutated
//! afterwards.

use crate::errors::{MetricDiffError, Result};
use crate::model::MetricRecord;
use std::collections::BTreeMap;

/// How repeated identity keys within one catalog are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexMode {
    /// The record seen last in decode order replaces earlier ones.
    #[default]
    Lenient,
    /// A repeated key is rejected with `DuplicateIdentityKey`.
    Strict,
}

/// One catalog version keyed by identity key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    records: BTreeMap<String, MetricRecord>,
}

impl Snapshot {
    /// Index records with last-write-wins on key collision.
    pub fn from_records(records: impl IntoIterator<Item = MetricRecord>) -> Self {
        let records = records
            .into_iter()
            .fold(BTreeMap::new(), |mut acc, record| {
                let key = record.key();
                if acc.insert(key.clone(), record).is_some() {
                    tracing::debug!(
                        metric_key = %key,
                        "duplicate identity key, keeping later record"
                    );
                }
                acc
            });
        Self { records }
    }

    /// Index records, rejecting the first repeated identity key.
    ///
    /// # Errors
    ///
    /// - `DuplicateIdentityKey` — two records resolve to the same key
    pub fn from_records_strict(records: impl IntoIterator<Item = MetricRecord>) -> Result<Self> {
        let mut indexed = BTreeMap::new();
        for record in records {
            let key = record.key();
            if indexed.contains_key(&key) {
                return Err(MetricDiffError::DuplicateIdentityKey { key });
            }
            indexed.insert(key, record);
        }
        Ok(Self { records: indexed })
    }

    /// Index records using the given mode.
    ///
    /// # Errors
    ///
    /// - `DuplicateIdentityKey` — only in [`IndexMode::Strict`]
    pub fn index(records: impl IntoIterator<Item = MetricRecord>, mode: IndexMode) -> Result<Self> {
        match mode {
            IndexMode::Lenient => Ok(Self::from_records(records)),
            IndexMode::Strict => Self::from_records_strict(records),
        }
    }

    pub fn get(&self, key: &str) -> Option<&MetricRecord> {
        self.records.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricRecord)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<MetricRecord> for Snapshot {
    fn from_iter<I: IntoIterator<Item = MetricRecord>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}
