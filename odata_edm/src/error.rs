//! Error type for metadata snapshot loading

/// Failures while loading or validating a metadata document.
///
/// The grammar layer never sees these: once a snapshot is built it is
/// read-only, and matcher misses are signaled by absence, not errors.
#[derive(Debug, thiserror::Error)]
pub enum EdmError {
    #[error("malformed metadata document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid metadata document: {reason}")]
    Invalid { reason: String },
}
