//! Property tests for the comparison engine.

use metricdiff_core::diff::{compare_snapshots, ChangeType, MetricDiff};
use metricdiff_core::{MetricRecord, Snapshot};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn record_strategy() -> impl Strategy<Value = MetricRecord> {
    (
        prop::sample::select(vec!["", "apiserver", "kubelet"]),
        prop::sample::select(vec!["", "storage"]),
        "[a-e]{1,2}",
        prop::sample::select(vec!["", "counter", "gauge", "histogram"]),
        prop::sample::select(vec!["", "help one", "help two"]),
        prop::collection::vec(prop::sample::select(vec!["code", "verb", "pod"]), 0..3),
        prop::collection::vec(prop::sample::select(vec![0.1, 1.0, 10.0]), 0..3),
    )
        .prop_map(
            |(namespace, subsystem, name, metric_type, help, labels, buckets)| MetricRecord {
                namespace: namespace.to_string(),
                subsystem: subsystem.to_string(),
                metric_type: metric_type.to_string(),
                help: help.to_string(),
                labels: labels.into_iter().map(str::to_string).collect(),
                buckets,
                ..MetricRecord::new(name)
            },
        )
}

fn snapshot_strategy() -> impl Strategy<Value = Snapshot> {
    prop::collection::vec(record_strategy(), 0..12).prop_map(Snapshot::from_records)
}

fn keys(diffs: &[MetricDiff<'_>], change_type: ChangeType) -> BTreeSet<String> {
    diffs
        .iter()
        .filter(|d| d.change_type == change_type)
        .map(|d| d.key.clone())
        .collect()
}

fn reversed_records(snapshot: &Snapshot) -> Vec<MetricRecord> {
    let mut records: Vec<MetricRecord> = snapshot.iter().map(|(_, r)| r.clone()).collect();
    records.reverse();
    records
}

proptest! {
    #[test]
    fn prop_self_compare_is_empty(snapshot in snapshot_strategy()) {
        prop_assert!(compare_snapshots(&snapshot, &snapshot).is_empty());
    }

    #[test]
    fn prop_add_remove_symmetry(a in snapshot_strategy(), b in snapshot_strategy()) {
        let forward = compare_snapshots(&a, &b);
        let backward = compare_snapshots(&b, &a);
        prop_assert_eq!(keys(&forward, ChangeType::Added), keys(&backward, ChangeType::Removed));
        prop_assert_eq!(keys(&forward, ChangeType::Removed), keys(&backward, ChangeType::Added));
        prop_assert_eq!(keys(&forward, ChangeType::Updated), keys(&backward, ChangeType::Updated));
    }

    #[test]
    fn prop_partition_is_complete(a in snapshot_strategy(), b in snapshot_strategy()) {
        let diffs = compare_snapshots(&a, &b);

        // No key appears twice
        let emitted: Vec<&str> = diffs.iter().map(|d| d.key.as_str()).collect();
        let unique: BTreeSet<&str> = emitted.iter().copied().collect();
        prop_assert_eq!(emitted.len(), unique.len());

        // Every key in old ∪ new is either emitted or an unchanged pair
        let universe: BTreeSet<&str> = a.keys().chain(b.keys()).collect();
        for key in universe {
            if !unique.contains(key) {
                prop_assert_eq!(a.get(key), b.get(key));
            }
        }

        for diff in &diffs {
            match diff.change_type {
                ChangeType::Added => {
                    prop_assert!(!a.contains_key(&diff.key) && b.contains_key(&diff.key));
                }
                ChangeType::Removed => {
                    prop_assert!(a.contains_key(&diff.key) && !b.contains_key(&diff.key));
                }
                ChangeType::Updated => {
                    prop_assert!(!diff.changes.is_empty());
                }
            }
        }
    }

    #[test]
    fn prop_output_sorted_and_independent_of_build_order(
        a in snapshot_strategy(),
        b in snapshot_strategy(),
    ) {
        let diffs = compare_snapshots(&a, &b);
        let emitted: Vec<&String> = diffs.iter().map(|d| &d.key).collect();
        let mut sorted = emitted.clone();
        sorted.sort();
        prop_assert_eq!(&emitted, &sorted);

        // Rebuild both sides from reversed record order; keys are unique so
        // the snapshots are equal and so is the output.
        let a_rev: Snapshot = reversed_records(&a).into_iter().collect();
        let b_rev: Snapshot = reversed_records(&b).into_iter().collect();
        let again = compare_snapshots(&a_rev, &b_rev);
        prop_assert_eq!(diffs, again);
    }
}
