//! Error types for the ledger engine.

use star_registry_core::{ChainFault, CoreError};
use star_registry_identity::ProofError;
use star_registry_store::StoreError;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The submission's ownership proof was rejected; the inner kind says
    /// exactly why, unchanged from the protocol layer.
    #[error("ownership proof rejected: {0}")]
    Proof(#[from] ProofError),

    /// Post-append validation found the chain inconsistent. Fatal: the
    /// engine refuses all further appends until an operator investigates.
    #[error("chain corrupted: {} fault(s) found; appends disabled pending investigation", .faults.len())]
    ChainCorrupted { faults: Vec<ChainFault> },

    /// The storage backend failed or timed out.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// A payload could not be encoded or decoded.
    #[error("payload codec error: {0}")]
    Codec(#[from] CoreError),

    /// A service-boundary task failed before the engine ran.
    #[error("service task failed: {0}")]
    TaskFailed(String),
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
