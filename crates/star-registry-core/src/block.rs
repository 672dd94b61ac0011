//! Block: one immutable, hash-sealed entry in the ledger.
//!
//! A block is sealed exactly once, at append time. Its hash covers position,
//! previous-hash link, seal time, and payload; after sealing nothing is ever
//! recomputed except for validation checks.

use serde::{Deserialize, Serialize};

use crate::canonical::canonical_seal_bytes;
use crate::payload::EncodedPayload;
use crate::types::{BlockHash, Timestamp};

/// One sealed entry in the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    position: u64,
    previous_hash: Option<BlockHash>,
    sealed_at: Timestamp,
    payload: EncodedPayload,
    hash: BlockHash,
}

impl Block {
    /// Seal a new block over the given payload.
    ///
    /// `previous_hash` is `None` only for genesis. The digest is computed
    /// once, here, over the canonical serialization of everything but the
    /// hash itself.
    pub fn seal(
        payload: EncodedPayload,
        previous_hash: Option<BlockHash>,
        position: u64,
        sealed_at: Timestamp,
    ) -> Self {
        let seal_bytes =
            canonical_seal_bytes(position, previous_hash.as_ref(), sealed_at, &payload);
        let hash = BlockHash::digest(&seal_bytes);

        Self {
            position,
            previous_hash,
            sealed_at,
            payload,
            hash,
        }
    }

    /// Seal the fixed genesis block.
    pub fn genesis(sealed_at: Timestamp) -> Self {
        Self::seal(EncodedPayload::genesis(), None, 0, sealed_at)
    }

    /// Recompute the digest from stored content.
    ///
    /// Validation compares this against [`Block::hash`]; a mismatch means
    /// the block was mutated after sealing.
    pub fn fresh_hash(&self) -> BlockHash {
        let seal_bytes = canonical_seal_bytes(
            self.position,
            self.previous_hash.as_ref(),
            self.sealed_at,
            &self.payload,
        );
        BlockHash::digest(&seal_bytes)
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn previous_hash(&self) -> Option<&BlockHash> {
        self.previous_hash.as_ref()
    }

    pub fn sealed_at(&self) -> Timestamp {
        self.sealed_at
    }

    pub fn payload(&self) -> &EncodedPayload {
        &self.payload
    }

    pub fn hash(&self) -> &BlockHash {
        &self.hash
    }

    /// Whether this is the genesis block.
    pub fn is_genesis(&self) -> bool {
        self.position == 0
    }

    /// Rebuild a block from already-sealed parts without recomputing the
    /// digest. Exists for fault-injection in tests; a mismatched hash will
    /// be caught by validation, which is the point.
    pub fn from_sealed_parts(
        payload: EncodedPayload,
        previous_hash: Option<BlockHash>,
        position: u64,
        sealed_at: Timestamp,
        hash: BlockHash,
    ) -> Self {
        Self {
            position,
            previous_hash,
            sealed_at,
            payload,
            hash,
        }
    }
}
