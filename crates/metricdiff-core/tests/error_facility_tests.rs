use metricdiff_core::errors::{ExError, ExErrorKind, MetricDiffError};

#[test]
fn test_duplicate_key_maps_to_duplicate_kind() {
    let err = MetricDiffError::DuplicateIdentityKey {
        key: "kubelet_pods".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::DuplicateKey);
    assert_eq!(ex_err.code(), "ERR_DUPLICATE_KEY");
    assert_eq!(ex_err.metric_key(), Some("kubelet_pods"));
}

#[test]
fn test_read_failure_is_io_with_path() {
    let err = MetricDiffError::CatalogRead {
        path: "missing.yaml".to_string(),
        reason: "No such file or directory".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::Io);
    assert_eq!(ex_err.op(), Some("load_catalog"));
    assert_eq!(ex_err.path(), Some("missing.yaml"));
    assert!(ex_err.message().contains("No such file"));
}

#[test]
fn test_decode_failure_distinct_from_read_failure() {
    let err = MetricDiffError::CatalogDecode {
        path: "bad.yaml".to_string(),
        reason: "invalid type".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidCatalog);
    assert_ne!(ex_err.kind(), ExErrorKind::Io);
    assert_eq!(ex_err.code(), "ERR_INVALID_CATALOG");
}

#[test]
fn test_serialization_from_serde_json() {
    let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
    let err: MetricDiffError = json_err.into();
    assert!(matches!(err, MetricDiffError::Serialization { .. }));

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::Serialization);
}

#[test]
fn test_domain_error_display() {
    let err = MetricDiffError::DuplicateIdentityKey {
        key: "up".to_string(),
    };
    assert_eq!(err.to_string(), "Duplicate metric identity key: up");
}
