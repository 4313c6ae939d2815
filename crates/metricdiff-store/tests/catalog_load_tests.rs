// Integration tests for catalog loading and end-to-end comparison

use metricdiff_core::diff::{compare_snapshots, ChangeType};
use metricdiff_core::{ExErrorKind, IndexMode};
use metricdiff_store::{load_catalog, load_snapshot, version_from_path};
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

#[test]
fn test_load_catalog_decodes_all_fields() {
    // Given: a catalog with a summary metric
    let path = fixtures_dir().join("v1.29.yaml");

    // When
    let records = load_catalog(&path).expect("catalog should load");

    // Then: records keep document order and carry every attribute
    assert_eq!(records.len(), 5);
    assert_eq!(records[0].name, "request_total");

    let summary = &records[4];
    assert_eq!(summary.metric_type, "Summary");
    assert_eq!(summary.objectives.len(), 2);
    assert_eq!(summary.age_buckets, 5);
    assert_eq!(summary.buf_cap, 500);
    assert_eq!(summary.max_age, 600);
    assert_eq!(
        summary.const_labels.get("component").map(String::as_str),
        Some("apiserver")
    );

    let histogram = &records[1];
    assert_eq!(histogram.buckets, vec![0.05, 0.1, 0.5, 1.0]);
    assert_eq!(records[3].deprecated_version, "1.28.0");
}

#[test]
fn test_load_snapshot_keys_records() {
    let path = fixtures_dir().join("v1.29.yaml");
    let snapshot = load_snapshot(&path, IndexMode::Lenient).unwrap();

    assert!(snapshot.contains_key("apiserver_request_total"));
    assert!(snapshot.contains_key("etcd_storage_objects"));
    assert!(snapshot.contains_key("kubelet_evictions_number"));
}

#[test]
fn test_compare_fixture_versions() {
    // Given: two released catalogs
    let old = load_snapshot(&fixtures_dir().join("v1.29.yaml"), IndexMode::Lenient).unwrap();
    let new = load_snapshot(&fixtures_dir().join("v1.30.yaml"), IndexMode::Lenient).unwrap();

    // When
    let diffs = compare_snapshots(&old, &new);

    // Then
    let summary: Vec<(&str, ChangeType)> = diffs
        .iter()
        .map(|d| (d.key.as_str(), d.change_type))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("apiserver_request_duration_seconds", ChangeType::Updated),
            ("apiserver_request_latency_summary", ChangeType::Updated),
            ("apiserver_request_total", ChangeType::Updated),
            ("apiserver_watch_events_total", ChangeType::Added),
            ("etcd_storage_objects", ChangeType::Updated),
            ("kubelet_evictions_number", ChangeType::Removed),
        ]
    );

    assert_eq!(
        diffs[0].changes,
        vec![
            "Added labels: [`scope`]. <br> Removed labels: [`resource`].",
            "Buckets changed.",
        ]
    );
    assert_eq!(diffs[1].changes, vec!["BufCap changed from `500` to `1000`."]);
    assert_eq!(
        diffs[2].changes,
        vec![
            "Help text changed.",
            "Labels reordered: [verb, code] → [code, verb]",
        ]
    );
    assert_eq!(
        diffs[4].changes,
        vec!["Stability level changed from `ALPHA` to `BETA`."]
    );
}

#[test]
fn test_duplicates_lenient_keeps_last() {
    let path = fixtures_dir().join("duplicates.yaml");
    let snapshot = load_snapshot(&path, IndexMode::Lenient).unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.get("up").unwrap().help, "second definition");
}

#[test]
fn test_duplicates_strict_rejected() {
    let path = fixtures_dir().join("duplicates.yaml");
    let err = load_snapshot(&path, IndexMode::Strict).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::DuplicateKey);
    assert_eq!(err.metric_key(), Some("up"));
    assert!(err.path().unwrap().ends_with("duplicates.yaml"));
}

#[test]
fn test_invalid_catalog_rejected() {
    let path = fixtures_dir().join("invalid.yaml");
    let err = load_catalog(&path).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidCatalog);
    assert_eq!(err.code(), "ERR_INVALID_CATALOG");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("absent.yaml");
    let err = load_catalog(&path).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Io);
    assert_eq!(err.op(), Some("load_catalog"));
}

#[test]
fn test_empty_file_is_empty_catalog() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("empty.yaml");
    std::fs::write(&path, "").unwrap();
    assert!(load_catalog(&path).unwrap().is_empty());
}

#[test]
fn test_version_labels_from_fixture_names() {
    assert_eq!(version_from_path(&fixtures_dir().join("v1.29.yaml")), "v1.29");
    assert_eq!(version_from_path(&fixtures_dir().join("v1.30.yaml")), "v1.30");
}
