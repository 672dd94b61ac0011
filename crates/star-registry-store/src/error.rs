//! Error types for ledger storage.

use thiserror::Error;

/// Errors a storage backend can surface.
///
/// The bundled in-memory store never fails; the variants exist for the
/// seam, so fallible backends (and their timeouts) propagate as data the
/// engine can refuse on, never retry silently.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(String),

    #[error("storage backend timed out: {0}")]
    Timeout(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
