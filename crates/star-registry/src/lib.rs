//! # Star Registry
//!
//! A tamper-evident, append-only ledger of star ownership claims.
//!
//! ## Overview
//!
//! - **Blocks**: immutable, hash-sealed entries linked into a single chain
//! - **Ownership proofs**: a challenge/response signature protocol with a
//!   bounded validity window gates every submission
//! - **Validation**: the whole chain is re-checked after every append, and
//!   any inconsistency latches the engine shut
//! - **Queries**: by hash, by position, and by owner over decoded records
//!
//! ## Key Concepts
//!
//! - A block is sealed once and never mutated; divergence between its
//!   stored hash and a fresh recomputation is tampering.
//! - The ledger is an explicitly constructed value, not a singleton; tests
//!   run as many independent ledgers as they like.
//! - The engine is synchronous under one append lock. Async lives only in
//!   [`RegistryService`], the facade the routing layer mounts.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use star_registry::Ledger;
//! use star_registry::identity::Ed25519Verifier;
//! use star_registry::store::MemoryStore;
//!
//! fn example() {
//!     let ledger = Ledger::open(MemoryStore::new(), Box::new(Ed25519Verifier)).unwrap();
//!
//!     // Hand this to a client to sign:
//!     let challenge = ledger.request_challenge("93f3...b2c1");
//!
//!     // let block = ledger.submit(Submission { address, challenge, signature, star }).unwrap();
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `star_registry::core` - block model, sealing, validation
//! - `star_registry::identity` - the ownership-proof protocol
//! - `star_registry::store` - storage seam and the in-memory backend

pub mod error;
pub mod ledger;
pub mod service;

// Re-export component crates
pub use star_registry_core as core;
pub use star_registry_identity as identity;
pub use star_registry_store as store;

// Re-export main types for convenience
pub use error::{LedgerError, Result};
pub use ledger::{Ledger, Submission};
pub use service::RegistryService;

// Re-export commonly used component types
pub use star_registry_core::{
    Block, BlockHash, ChainFault, EncodedPayload, Keypair, Star, StarRecord, Timestamp,
};
pub use star_registry_identity::{Challenge, Ed25519Verifier, ProofError, VALIDITY_WINDOW_SECS};
pub use star_registry_store::MemoryStore;
