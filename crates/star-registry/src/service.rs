//! Async facade for the out-of-scope HTTP layer.
//!
//! The engine itself is synchronous under its append lock; this facade is
//! the one place async appears. Appends and submissions run under
//! `spawn_blocking` because signature verification and full-chain
//! validation are blocking work that should not sit on an async runtime
//! thread.

use std::sync::Arc;

use star_registry_core::{Block, BlockHash, ChainFault, StarRecord};
use star_registry_store::Store;

use crate::error::{LedgerError, Result};
use crate::ledger::{Ledger, Submission};

/// The service surface a routing layer mounts.
pub struct RegistryService<S: Store + 'static> {
    ledger: Arc<Ledger<S>>,
}

impl<S: Store + 'static> Clone for RegistryService<S> {
    fn clone(&self) -> Self {
        Self {
            ledger: Arc::clone(&self.ledger),
        }
    }
}

impl<S: Store + 'static> RegistryService<S> {
    /// Wrap an explicitly constructed ledger.
    pub fn new(ledger: Arc<Ledger<S>>) -> Self {
        Self { ledger }
    }

    /// The underlying ledger handle.
    pub fn ledger(&self) -> &Arc<Ledger<S>> {
        &self.ledger
    }

    /// Issue an ownership challenge for an address.
    pub async fn request_challenge(&self, address: &str) -> String {
        self.ledger.request_challenge(address)
    }

    /// Verify a submission and append its star.
    ///
    /// A failed blocking task surfaces as [`LedgerError::TaskFailed`],
    /// never a silent retry: retrying would re-read the clock after part of
    /// the validity window already elapsed.
    pub async fn submit_star(&self, submission: Submission) -> Result<Block> {
        let ledger = Arc::clone(&self.ledger);
        tokio::task::spawn_blocking(move || ledger.submit(submission))
            .await
            .map_err(|e| LedgerError::TaskFailed(e.to_string()))?
    }

    /// Current chain height.
    pub async fn height(&self) -> Result<u64> {
        self.ledger.height()
    }

    /// Look up a block by its hash.
    pub async fn block_by_hash(&self, hash: &BlockHash) -> Result<Option<Block>> {
        self.ledger.block_by_hash(hash)
    }

    /// Look up a block by its position.
    pub async fn block_by_position(&self, position: u64) -> Result<Option<Block>> {
        self.ledger.block_by_position(position)
    }

    /// All star records owned by an address, in append order.
    pub async fn stars_by_owner(&self, address: &str) -> Result<Vec<StarRecord>> {
        self.ledger.stars_by_owner(address)
    }

    /// The current validation report.
    pub async fn validation_report(&self) -> Result<Vec<ChainFault>> {
        let ledger = Arc::clone(&self.ledger);
        tokio::task::spawn_blocking(move || ledger.validation_report())
            .await
            .map_err(|e| LedgerError::TaskFailed(e.to_string()))?
    }
}
