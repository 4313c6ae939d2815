//! Metric catalog diff engine.
//!
//! Compares two indexed snapshots and produces a deterministic, key-ordered
//! list of per-metric differences suitable for report rendering.
//!
//! ## Entry point
//!
//! ```
//! use metricdiff_core::diff::compare_snapshots;
//! use metricdiff_core::{MetricRecord, Snapshot};
//!
//! let old = Snapshot::from_records(vec![MetricRecord::new("up")]);
//! let new = Snapshot::from_records(vec![MetricRecord::new("up"), MetricRecord::new("down")]);
//! let diffs = compare_snapshots(&old, &new);
//! assert_eq!(diffs.len(), 1);
//! assert_eq!(diffs[0].key, "down");
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: output is sorted by identity key regardless of how
//!   either snapshot was built.
//! - **Partition**: every key in `old ∪ new` is Added, Removed, Updated or
//!   omitted because nothing changed; never duplicated.
//! - **Infallible**: a record missing on one side is a classification, not
//!   an error.

pub mod comparators;
pub mod engine;
pub mod model;

pub use comparators::{field_changes, label_set_diff};
pub use engine::{compare_snapshots, sort_diffs};
pub use model::{ChangeType, DiffSummary, MetricDiff};
