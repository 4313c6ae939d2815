//! Error handling for metricdiff-store
//!
//! Wraps metricdiff-core ExError with store-specific helpers

use metricdiff_core::errors::{ExError, MetricDiffError};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a catalog read error
pub fn catalog_read(path: &Path, err: std::io::Error) -> ExError {
    MetricDiffError::CatalogRead {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
    .into()
}

/// Create a catalog decode error
pub fn catalog_decode(path: &str, reason: &str) -> ExError {
    MetricDiffError::CatalogDecode {
        path: path.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
