//! Catalog decoder
//!
//! Decodes YAML text into metric records, preserving document order.

use crate::errors::{catalog_decode, Result};
use metricdiff_core::MetricRecord;

/// Source label used when decoding text that did not come from a file.
pub const INLINE_SOURCE: &str = "<inline>";

/// Decode catalog text into records.
///
/// An empty or whitespace-only document is an empty catalog.
///
/// # Errors
///
/// - `InvalidCatalog` — text is not a YAML sequence of metric mappings,
///   or a field has the wrong type
pub fn decode_catalog_str(content: &str) -> Result<Vec<MetricRecord>> {
    decode_catalog_str_from(content, INLINE_SOURCE)
}

/// Decode catalog text, naming `source` in any error.
///
/// # Errors
///
/// - `InvalidCatalog` — see [`decode_catalog_str`]
pub fn decode_catalog_str_from(content: &str, source: &str) -> Result<Vec<MetricRecord>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let records: Option<Vec<MetricRecord>> = serde_yaml::from_str(content)
        .map_err(|e| catalog_decode(source, &format!("YAML parse error: {}", e)))?;
    let records = records.unwrap_or_default();

    tracing::debug!(source, record_count = records.len(), "decoded catalog");
    Ok(records)
}
