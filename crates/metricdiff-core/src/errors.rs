use thiserror::Error;

/// Result type alias using MetricDiffError
pub type Result<T> = std::result::Result<T, MetricDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Two records in one catalog resolve to the same identity key (strict mode)
    DuplicateKey,

    // Catalog decoding
    /// Catalog text is not a YAML sequence of metric records
    InvalidCatalog,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::DuplicateKey => "ERR_DUPLICATE_KEY",
            ExErrorKind::InvalidCatalog => "ERR_INVALID_CATALOG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional
/// context (operation, metric key, catalog path) for humans.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    metric_key: Option<String>,
    path: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            metric_key: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add metric identity key context
    pub fn with_metric_key(mut self, key: impl Into<String>) -> Self {
        self.metric_key = Some(key.into());
        self
    }

    /// Add catalog path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the metric key context, if any
    pub fn metric_key(&self) -> Option<&str> {
        self.metric_key.as_deref()
    }

    /// Get the catalog path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(key) = &self.metric_key {
            write!(f, " (metric_key: {})", key)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised while loading, indexing and rendering catalogs
///
/// The diff itself never fails; these come from the edges around it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricDiffError {
    /// Two records in one catalog share an identity key (strict indexing only)
    #[error("Duplicate metric identity key: {key}")]
    DuplicateIdentityKey { key: String },

    /// Catalog file could not be read
    #[error("Failed to read catalog {path}: {reason}")]
    CatalogRead { path: String, reason: String },

    /// Catalog text is not a valid list of metric records
    #[error("Failed to decode catalog {path}: {reason}")]
    CatalogDecode { path: String, reason: String },

    /// A diff or record could not be serialized for output
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<MetricDiffError> for ExError {
    fn from(err: MetricDiffError) -> Self {
        match err {
            MetricDiffError::DuplicateIdentityKey { key } => {
                ExError::new(ExErrorKind::DuplicateKey)
                    .with_op("index_snapshot")
                    .with_metric_key(key)
                    .with_message("Duplicate metric identity key in catalog")
            }

            MetricDiffError::CatalogRead { path, reason } => ExError::new(ExErrorKind::Io)
                .with_op("load_catalog")
                .with_path(path)
                .with_message(reason),

            MetricDiffError::CatalogDecode { path, reason } => {
                ExError::new(ExErrorKind::InvalidCatalog)
                    .with_op("decode_catalog")
                    .with_path(path)
                    .with_message(reason)
            }

            MetricDiffError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for MetricDiffError {
    fn from(err: serde_json::Error) -> Self {
        MetricDiffError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for MetricDiffError {
    fn from(err: serde_yaml::Error) -> Self {
        MetricDiffError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_unique() {
        let kinds = [
            ExErrorKind::DuplicateKey,
            ExErrorKind::InvalidCatalog,
            ExErrorKind::Io,
            ExErrorKind::Serialization,
        ];
        let mut codes: Vec<&str> = kinds.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_display_includes_code_op_and_context() {
        let err = ExError::new(ExErrorKind::InvalidCatalog)
            .with_op("decode_catalog")
            .with_path("v1.yaml")
            .with_message("expected a sequence");
        let text = err.to_string();
        assert!(text.starts_with("[ERR_INVALID_CATALOG]"));
        assert!(text.contains("in operation 'decode_catalog'"));
        assert!(text.contains(": expected a sequence"));
        assert!(text.contains("(path: v1.yaml)"));
    }

    #[test]
    fn test_display_without_message_omits_separator() {
        let err = ExError::new(ExErrorKind::Serialization);
        assert_eq!(err.to_string(), "[ERR_SERIALIZATION]");
    }
}
