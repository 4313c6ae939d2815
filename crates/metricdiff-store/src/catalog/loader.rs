//! Catalog file loading

use crate::catalog::parser::decode_catalog_str_from;
use crate::errors::{catalog_read, Result};
use metricdiff_core::{ExError, IndexMode, MetricRecord, Snapshot};
use std::fs;
use std::path::Path;

/// Read and decode a catalog file.
///
/// # Errors
///
/// - `Io` — the file cannot be read
/// - `InvalidCatalog` — the file is not a valid catalog
pub fn load_catalog(path: &Path) -> Result<Vec<MetricRecord>> {
    let content = fs::read_to_string(path).map_err(|e| catalog_read(path, e))?;
    decode_catalog_str_from(&content, &path.display().to_string())
}

/// Read, decode and index a catalog file.
///
/// # Errors
///
/// - `Io` / `InvalidCatalog` — see [`load_catalog`]
/// - `DuplicateKey` — a repeated identity key under [`IndexMode::Strict`]
pub fn load_snapshot(path: &Path, mode: IndexMode) -> Result<Snapshot> {
    let records = load_catalog(path)?;
    let snapshot = Snapshot::index(records, mode)
        .map_err(|e| ExError::from(e).with_path(path.display().to_string()))?;
    tracing::debug!(
        path = %path.display(),
        metric_count = snapshot.len(),
        "indexed catalog"
    );
    Ok(snapshot)
}

/// Derive a version label from a catalog path: the file name without its
/// final extension (`metrics/v1.30.yaml` → `v1.30`).
pub fn version_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.rfind('.') {
        Some(dot) => name[..dot].to_string(),
        None => name,
    }
}
