//! Catalog loading
//!
//! A catalog is a YAML sequence of metric definitions. Loading reads the
//! bytes, decodes the records in document order and indexes them into a
//! snapshot.

pub mod loader;
pub mod parser;

pub use loader::{load_catalog, load_snapshot, version_from_path};
pub use parser::decode_catalog_str;
