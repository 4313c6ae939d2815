//! Identity keyer
//!
//! A metric is "the same metric" across two snapshots iff its identity key
//! is equal as a string.

/// Separator placed between the non-empty key components.
pub const KEY_SEPARATOR: &str = "_";

/// Build the identity key for a metric.
///
/// Joins the non-empty components among `namespace`, `subsystem` and `name`,
/// in that order. `name` always participates, even when empty.
pub fn metric_key(namespace: &str, subsystem: &str, name: &str) -> String {
    let mut parts = Vec::with_capacity(3);
    if !namespace.is_empty() {
        parts.push(namespace);
    }
    if !subsystem.is_empty() {
        parts.push(subsystem);
    }
    parts.push(name);
    parts.join(KEY_SEPARATOR)
}
