//! # Star Registry Core
//!
//! Pure primitives for the star registry ledger: blocks, sealing,
//! canonicalization, and chain validation.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over cryptographic data structures.
//!
//! ## Key Types
//!
//! - [`Block`] - One immutable, hash-sealed ledger entry
//! - [`BlockHash`] - Content address of a sealed block (Blake3 digest)
//! - [`StarRecord`] - The decoded payload of a non-genesis block
//! - [`Timestamp`] - Whole seconds since the Unix epoch
//!
//! ## Canonicalization
//!
//! Seal inputs are encoded as deterministic CBOR. See [`canonical`].

pub mod block;
pub mod canonical;
pub mod crypto;
pub mod error;
pub mod payload;
pub mod types;
pub mod validation;

pub use block::Block;
pub use canonical::canonical_seal_bytes;
pub use crypto::{Ed25519PublicKey, Ed25519Signature, Keypair};
pub use error::{ChainFault, CoreError};
pub use payload::{EncodedPayload, Star, StarRecord, GENESIS_MARKER};
pub use types::{BlockHash, Timestamp};
pub use validation::validate_chain;
