//! The Ledger: the single-writer engine over the sealed sequence.
//!
//! The chain moves through three states: empty, initialized (genesis
//! sealed), growing. Genesis is sealed exactly once, at [`Ledger::open`],
//! with no ownership check; every later block arrives through the
//! proof-gated [`Ledger::submit`] path or the unguarded [`Ledger::append`]
//! primitive it delegates to.

use std::sync::{Arc, Mutex, RwLock};

use tracing::{debug, error, info};

use star_registry_core::{
    validate_chain, Block, BlockHash, ChainFault, EncodedPayload, Star, StarRecord, Timestamp,
};
use star_registry_identity::{verify_submission, Challenge, SignatureVerifier};
use star_registry_store::Store;

use crate::error::{LedgerError, Result};

/// A star submission: the triple proving ownership plus the star itself.
#[derive(Debug, Clone)]
pub struct Submission {
    /// The address claiming ownership.
    pub address: String,

    /// The challenge string the client was handed.
    pub challenge: String,

    /// Hex of the detached signature over the exact challenge bytes.
    pub signature: String,

    /// The star to record.
    pub star: Star,
}

/// The ledger engine.
///
/// Appends serialize on one mutex: two concurrent appends can never observe
/// the same position or previous-hash. Queries and validation run
/// concurrently against store snapshots; the store's push is the atomic
/// visibility boundary.
pub struct Ledger<S: Store> {
    store: Arc<S>,
    verifier: Box<dyn SignatureVerifier>,
    append_lock: Mutex<()>,
    /// Fail-closed latch: non-empty after a corrupted post-append check.
    faults: RwLock<Vec<ChainFault>>,
}

impl<S: Store> Ledger<S> {
    /// Open a ledger over the given store and verification primitive.
    ///
    /// An empty store gets its genesis block sealed here; a pre-populated
    /// one is validated as-is, and a ledger that opens corrupted starts
    /// with appends already disabled.
    pub fn open(store: S, verifier: Box<dyn SignatureVerifier>) -> Result<Self> {
        let ledger = Self {
            store: Arc::new(store),
            verifier,
            append_lock: Mutex::new(()),
            faults: RwLock::new(Vec::new()),
        };

        if ledger.store.is_empty()? {
            ledger.append_at(EncodedPayload::genesis(), Timestamp::now())?;
            info!("ledger initialized with genesis block");
        } else {
            let faults = ledger.validation_report()?;
            if !faults.is_empty() {
                error!(fault_count = faults.len(), "ledger opened corrupted");
                *ledger.faults.write().unwrap() = faults;
            }
        }

        Ok(ledger)
    }

    /// The store this ledger appends to.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    // ─────────────────────────────────────────────────────────────────────
    // Ownership protocol
    // ─────────────────────────────────────────────────────────────────────

    /// Issue a challenge for an address at the current time.
    pub fn request_challenge(&self, address: &str) -> String {
        self.request_challenge_at(address, Timestamp::now())
    }

    /// Issue a challenge at an explicit time.
    pub fn request_challenge_at(&self, address: &str, now: Timestamp) -> String {
        Challenge::issue(address, now).to_string()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Append operations
    // ─────────────────────────────────────────────────────────────────────

    /// Verify an ownership proof and append the star, at the current time.
    pub fn submit(&self, submission: Submission) -> Result<Block> {
        self.submit_at(submission, Timestamp::now())
    }

    /// Verify an ownership proof and append the star, at an explicit time.
    ///
    /// `now` is captured once by the caller and used for both the validity
    /// window and the seal, so the elapsed-time check and the signature
    /// check cannot race against a moving clock. Proof failures propagate
    /// unchanged as [`LedgerError::Proof`].
    pub fn submit_at(&self, submission: Submission, now: Timestamp) -> Result<Block> {
        self.refuse_if_corrupted()?;

        let challenge = verify_submission(
            self.verifier.as_ref(),
            &submission.address,
            &submission.challenge,
            &submission.signature,
            now,
        )?;

        let record = StarRecord {
            owner: submission.address,
            // The address substring the client embedded, kept verbatim for
            // attribution without re-deriving it from the signature.
            message: challenge.address().to_string(),
            star: submission.star,
        };
        let payload = EncodedPayload::encode(&record)?;

        let block = self.append_at(payload, now)?;
        debug!(owner = %record.owner, position = block.position(), "star recorded");
        Ok(block)
    }

    /// Seal and append a payload at the current time.
    pub fn append(&self, payload: EncodedPayload) -> Result<Block> {
        self.append_at(payload, Timestamp::now())
    }

    /// Seal and append a payload at an explicit time.
    ///
    /// Position and previous-hash are read from the tail under the append
    /// lock, the block is sealed and pushed, and the whole chain is
    /// re-validated. Every append pays the full validation cost; any fault
    /// latches the engine shut.
    pub fn append_at(&self, payload: EncodedPayload, now: Timestamp) -> Result<Block> {
        self.refuse_if_corrupted()?;

        let _guard = self.append_lock.lock().unwrap();

        let position = self.store.len()?;
        let previous_hash = self.store.tip()?.map(|tip| *tip.hash());

        let block = Block::seal(payload, previous_hash, position, now);
        self.store.push(block.clone())?;

        let faults = validate_chain(&self.store.snapshot()?);
        if !faults.is_empty() {
            error!(
                fault_count = faults.len(),
                position, "post-append validation failed; refusing further appends"
            );
            *self.faults.write().unwrap() = faults.clone();
            return Err(LedgerError::ChainCorrupted { faults });
        }

        info!(position, hash = %block.hash(), "sealed block");
        Ok(block)
    }

    fn refuse_if_corrupted(&self) -> Result<()> {
        let faults = self.faults.read().unwrap();
        if faults.is_empty() {
            Ok(())
        } else {
            Err(LedgerError::ChainCorrupted {
                faults: faults.clone(),
            })
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Query operations
    // ─────────────────────────────────────────────────────────────────────

    /// Current chain height (number of blocks, genesis included).
    pub fn height(&self) -> Result<u64> {
        Ok(self.store.len()?)
    }

    /// The block with the given hash, if any.
    pub fn block_by_hash(&self, hash: &BlockHash) -> Result<Option<Block>> {
        Ok(self.store.by_hash(hash)?)
    }

    /// The block at the given position, if it exists.
    pub fn block_by_position(&self, position: u64) -> Result<Option<Block>> {
        Ok(self.store.by_position(position)?)
    }

    /// Every star record owned by an address, in append order.
    ///
    /// Genesis is excluded (it has no owner) and results are decoded
    /// records, never raw payloads. An unknown owner yields an empty list.
    pub fn stars_by_owner(&self, address: &str) -> Result<Vec<StarRecord>> {
        let chain = self.store.snapshot()?;
        let mut records = Vec::new();
        for block in chain.iter().filter(|b| !b.is_genesis()) {
            let record = block.payload().decode()?;
            if record.owner == address {
                records.push(record);
            }
        }
        Ok(records)
    }

    /// Validate the whole chain and return every fault found.
    ///
    /// Read-only and always available, corrupted or not: this is the
    /// diagnostic surface an operator investigates with.
    pub fn validation_report(&self) -> Result<Vec<ChainFault>> {
        Ok(validate_chain(&self.store.snapshot()?))
    }

    /// Whether the fail-closed latch is set.
    pub fn is_corrupted(&self) -> bool {
        !self.faults.read().unwrap().is_empty()
    }
}
