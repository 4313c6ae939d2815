//! metricdiff Store - Catalog loading from disk
//!
//! Provides:
//! - YAML catalog decoding into metric records
//! - Snapshot loading with lenient or strict indexing
//! - Version labels derived from catalog file names

pub mod catalog;
pub mod errors;

// Re-export key types
pub use catalog::{decode_catalog_str, load_catalog, load_snapshot, version_from_path};
pub use errors::Result;
