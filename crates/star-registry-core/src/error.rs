//! Error types for the star registry core.

use thiserror::Error;

/// Core errors that can occur during payload and crypto operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid signature")]
    InvalidSignature,

    #[error("invalid public key")]
    InvalidPublicKey,

    #[error("payload encoding failed: {0}")]
    PayloadEncoding(String),

    #[error("payload decoding failed: {0}")]
    PayloadDecoding(String),

    #[error("genesis payload carries no star record")]
    GenesisPayload,
}

/// A single inconsistency found while validating the chain.
///
/// Faults are data, not control flow: validation reports every fault it
/// finds and the caller decides what to do with the list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainFault {
    /// The block's stored hash does not match a fresh recomputation of its
    /// content. The block was mutated after sealing.
    #[error("block {position}: stored hash does not match recomputed content hash")]
    InvalidHash { position: u64 },

    /// The block's stored previous-hash does not match the previous block's
    /// stored hash. The link between the two blocks is broken.
    #[error("block {position}: previous-hash link does not match the preceding block")]
    InvalidLink { position: u64 },
}

impl ChainFault {
    /// The position the fault was detected at.
    pub fn position(&self) -> u64 {
        match self {
            ChainFault::InvalidHash { position } => *position,
            ChainFault::InvalidLink { position } => *position,
        }
    }
}
