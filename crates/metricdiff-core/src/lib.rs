//! metricdiff Core - In-memory metric catalog comparison kernel
//!
//! This crate provides the data structures and operations for comparing two
//! versions of a metrics catalog:
//! - Metric record model and identity keys
//! - Snapshot indexing (last-write-wins or strict)
//! - Field-level diff engine with deterministic, key-ordered output
//! - Markdown and JSON report rendering
//!
//! No file I/O happens here; see `metricdiff-store` for catalog loading.

pub mod diff;
pub mod errors;
pub mod identity;
pub mod logging_facility;
pub mod model;
pub mod render;
pub mod snapshot;

// Re-export commonly used types
pub use diff::{compare_snapshots, ChangeType, DiffSummary, MetricDiff};
pub use errors::{ExError, ExErrorKind, MetricDiffError, Result};
pub use identity::metric_key;
pub use model::{MetricRecord, Objectives};
pub use snapshot::{IndexMode, Snapshot};
